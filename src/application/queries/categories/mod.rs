mod service;

pub use service::{CategoryQueryService, GetCategoryBySlugQuery};

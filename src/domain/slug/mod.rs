pub mod services;
pub mod value_objects;

pub use services::{SlugGenerator, SlugLookup, UniqueSlugService};
pub use value_objects::Slug;

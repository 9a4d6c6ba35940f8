mod service;

pub use service::FavoriteQueryService;

mod service;

pub use service::UserQueryService;

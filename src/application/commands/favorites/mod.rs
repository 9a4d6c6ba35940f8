mod favorite;
mod service;
mod unfavorite;

pub use favorite::FavoriteBookCommand;
pub use service::FavoriteCommandService;
pub use unfavorite::UnfavoriteBookCommand;

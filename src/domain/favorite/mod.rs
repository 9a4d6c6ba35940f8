pub mod entity;
pub mod repository;

pub use entity::{Favorite, FavoriteId, NewFavorite};
pub use repository::FavoriteRepository;

// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_book;
mod postgres_category;
mod postgres_favorite;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_book::{PostgresBookReadRepository, PostgresBookWriteRepository};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_favorite::PostgresFavoriteRepository;
pub use postgres_user::PostgresUserRepository;

use crate::domain::book::{Book, BookId};
use crate::domain::errors::DomainResult;
use crate::domain::favorite::entity::{Favorite, NewFavorite};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn insert(&self, favorite: NewFavorite) -> DomainResult<Favorite>;
    /// Remove every record for the pair and report how many were removed.
    async fn delete_pair(&self, user_id: UserId, book_id: BookId) -> DomainResult<u64>;
    /// Distinct books favorited by `user_id`, newest first.
    async fn list_books_for_user(&self, user_id: UserId) -> DomainResult<Vec<Book>>;
}

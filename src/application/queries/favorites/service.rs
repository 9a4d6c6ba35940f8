use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, BookDto},
        error::ApplicationResult,
    },
    domain::favorite::FavoriteRepository,
};

pub struct FavoriteQueryService {
    favorite_repo: Arc<dyn FavoriteRepository>,
}

impl FavoriteQueryService {
    pub fn new(favorite_repo: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorite_repo }
    }

    /// Books the caller has favorited, each listed once, newest first.
    pub async fn list_favorites(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<BookDto>> {
        let books = self.favorite_repo.list_books_for_user(actor.id).await?;
        Ok(books.into_iter().map(Into::into).collect())
    }
}

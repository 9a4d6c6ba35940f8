// src/application/commands/favorites/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        book::{BookId, BookReadRepository},
        favorite::FavoriteRepository,
    },
};

pub struct FavoriteCommandService {
    pub(super) favorite_repo: Arc<dyn FavoriteRepository>,
    pub(super) book_repo: Arc<dyn BookReadRepository>,
}

impl FavoriteCommandService {
    pub fn new(
        favorite_repo: Arc<dyn FavoriteRepository>,
        book_repo: Arc<dyn BookReadRepository>,
    ) -> Self {
        Self {
            favorite_repo,
            book_repo,
        }
    }

    pub(super) async fn ensure_book_exists(&self, raw_id: i64) -> ApplicationResult<BookId> {
        let id = BookId::new(raw_id)?;
        match self.book_repo.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(ApplicationError::not_found("book not found")),
        }
    }
}

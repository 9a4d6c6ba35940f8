// src/application/commands/favorites/unfavorite.rs
use super::FavoriteCommandService;
use crate::application::{
    dto::{AuthenticatedUser, UnfavoriteDto},
    error::ApplicationResult,
};

pub struct UnfavoriteBookCommand {
    pub book_id: i64,
}

impl FavoriteCommandService {
    /// Removes every favorite record the caller holds for the book.
    pub async fn unfavorite_book(
        &self,
        actor: &AuthenticatedUser,
        command: UnfavoriteBookCommand,
    ) -> ApplicationResult<UnfavoriteDto> {
        let book_id = self.ensure_book_exists(command.book_id).await?;
        let removed = self.favorite_repo.delete_pair(actor.id, book_id).await?;

        tracing::debug!(
            book_id = command.book_id,
            user_id = i64::from(actor.id),
            removed,
            "book unfavorited"
        );
        Ok(UnfavoriteDto { removed })
    }
}

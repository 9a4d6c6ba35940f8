// src/application/commands/books/delete.rs
use super::BookCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::BookId,
};

pub struct DeleteBookCommand {
    pub id: i64,
}

impl BookCommandService {
    /// Favorites and category links go with the book.
    pub async fn delete_book(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteBookCommand,
    ) -> ApplicationResult<()> {
        let id = BookId::new(command.id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("book not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(book_id = command.id, user_id = i64::from(actor.id), "book deleted");
        Ok(())
    }
}

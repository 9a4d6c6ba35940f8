// src/application/commands/books/update.rs
use super::BookCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BookDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::{BookId, BookUpdate},
};

/// Partial update. `image: Some(None)` clears the image.
#[derive(Default)]
pub struct UpdateBookCommand {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<Option<String>>,
    pub category_ids: Option<Vec<i64>>,
}

impl BookCommandService {
    pub async fn update_book(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateBookCommand,
    ) -> ApplicationResult<BookDto> {
        let id = BookId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))?;

        let mut update = BookUpdate::new(id);
        if let Some(title) = command.title {
            update = update.with_title(title);
        }
        if let Some(author) = command.author {
            update = update.with_author(author);
        }
        if let Some(description) = command.description {
            update = update.with_description(description);
        }
        if let Some(url) = command.url {
            update = update.with_url(url);
        }
        if let Some(image) = command.image {
            update = update.with_image(image);
        }
        if let Some(raw_ids) = command.category_ids {
            update = update.with_category_ids(self.resolve_category_ids(raw_ids).await?);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            book_id = command.id,
            user_id = i64::from(actor.id),
            "book updated"
        );
        Ok(updated.into())
    }
}

// src/application/commands/books/create.rs
use std::sync::Arc;

use super::BookCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BookDto},
        error::ApplicationResult,
    },
    domain::{book::NewBook, slug::Slug},
};

pub struct CreateBookCommand {
    pub title: String,
    pub author: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub category_ids: Vec<i64>,
    /// Explicit slug; generated from the title when absent or empty.
    pub slug: Option<String>,
}

impl BookCommandService {
    pub async fn create_book(
        &self,
        actor: &AuthenticatedUser,
        command: CreateBookCommand,
    ) -> ApplicationResult<BookDto> {
        let CreateBookCommand {
            title,
            author,
            description,
            url,
            image,
            category_ids,
            slug,
        } = command;

        let category_ids = self.resolve_category_ids(category_ids).await?;
        let date_added = self.clock.now().date_naive();

        let write_repo = Arc::clone(&self.write_repo);
        let created = self
            .slug_service
            .persist_with_unique_slug(
                Slug::preset(slug),
                &title,
                self.read_repo.as_ref(),
                |slug| {
                    let repo = Arc::clone(&write_repo);
                    let book = NewBook {
                        title: title.clone(),
                        author: author.clone(),
                        description: description.clone(),
                        category_ids: category_ids.clone(),
                        date_added,
                        image: image.clone(),
                        url: url.clone(),
                        slug,
                    };
                    async move { repo.insert(book).await }
                },
            )
            .await?;

        tracing::info!(
            book_id = i64::from(created.id),
            slug = %created.slug,
            user_id = i64::from(actor.id),
            "book created"
        );
        Ok(created.into())
    }
}

// src/application/commands/categories/create.rs
use std::sync::Arc;

use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::{category::NewCategory, slug::Slug},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let CreateCategoryCommand { name, slug } = command;

        let repo = Arc::clone(&self.repo);
        let created = self
            .slug_service
            .persist_with_unique_slug(Slug::preset(slug), &name, self.repo.as_ref(), |slug| {
                let repo = Arc::clone(&repo);
                let category = NewCategory {
                    name: name.clone(),
                    slug,
                };
                async move { repo.insert(category).await }
            })
            .await?;

        tracing::info!(
            category_id = i64::from(created.id),
            slug = %created.slug,
            user_id = i64::from(actor.id),
            "category created"
        );
        Ok(created.into())
    }
}

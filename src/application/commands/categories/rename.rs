// src/application/commands/categories/rename.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryUpdate},
};

pub struct RenameCategoryCommand {
    pub id: i64,
    pub name: String,
}

impl CategoryCommandService {
    /// The slug keeps the value it was given at creation.
    pub async fn rename_category(
        &self,
        actor: &AuthenticatedUser,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        let updated = self
            .repo
            .update(CategoryUpdate {
                id,
                name: command.name,
            })
            .await?;
        tracing::info!(category_id = command.id, user_id = i64::from(actor.id), "category renamed");
        Ok(updated.into())
    }
}

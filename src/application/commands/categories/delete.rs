// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }

        self.repo.delete(id).await?;
        tracing::info!(category_id = command.id, user_id = i64::from(actor.id), "category deleted");
        Ok(())
    }
}

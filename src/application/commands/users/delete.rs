use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Delete the caller's account together with their favorites.
    pub async fn delete_current_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.user_repo.delete(actor.id).await?;
        tracing::info!(user_id = i64::from(actor.id), "user deleted");
        Ok(())
    }
}

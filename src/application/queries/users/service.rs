use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::security::TokenIssuer,
    },
    domain::user::UserRepository,
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            user_repo,
            token_issuer,
        }
    }

    /// Resolve a presented bearer token to the user it was issued to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token.is_empty() {
            return Err(ApplicationError::unauthorized("missing bearer token"));
        }
        let digest = self.token_issuer.digest(token)?;
        let user = self
            .user_repo
            .find_by_token_digest(&digest)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        Ok(user.into())
    }
}

use std::sync::Arc;

use crate::application::ports::{security::TokenIssuer, time::Clock};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) token_issuer: Arc<dyn TokenIssuer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_issuer: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            token_issuer,
            clock,
        }
    }
}

use super::UserCommandService;
use crate::{
    application::{dto::RegisteredUserDto, error::ApplicationResult},
    domain::user::{NewUser, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
}

impl UserCommandService {
    /// Create a user and hand back the bearer token. Only its digest is stored.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<RegisteredUserDto> {
        let username = Username::new(command.username)?;
        let issued = self.token_issuer.issue()?;

        let user = self
            .user_repo
            .insert(NewUser {
                username,
                token_digest: issued.digest,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user_id = i64::from(user.id), username = %user.username, "user registered");
        Ok(RegisteredUserDto {
            user: user.into(),
            token: issued.token,
        })
    }
}

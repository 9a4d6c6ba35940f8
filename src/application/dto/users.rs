use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into_inner(),
            created_at: user.created_at,
        }
    }
}

/// Returned once at registration. `token` is not retrievable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUserDto {
    pub user: UserDto,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.into_inner(),
        }
    }
}

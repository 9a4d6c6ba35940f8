// src/domain/user/entity.rs
use crate::domain::user::value_objects::{TokenDigest, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub token_digest: TokenDigest,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub token_digest: TokenDigest,
    pub created_at: DateTime<Utc>,
}

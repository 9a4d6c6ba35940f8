use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{TokenDigest, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_token_digest(&self, digest: &TokenDigest) -> DomainResult<Option<User>>;

    /// Deleting a user also removes their favorites.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}

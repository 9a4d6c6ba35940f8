// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A slug was taken between the collision check and the insert.
    #[error("slug collision: {0}")]
    SlugCollision(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn is_slug_collision(&self) -> bool {
        matches!(self, Self::SlugCollision(_))
    }
}

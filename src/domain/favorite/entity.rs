// src/domain/favorite/entity.rs
use crate::domain::book::BookId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteId(pub i64);

impl FavoriteId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "favorite id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<FavoriteId> for i64 {
    fn from(value: FavoriteId) -> Self {
        value.0
    }
}

/// Join record between a user and a book. The same pair may be recorded
/// more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub book_id: BookId,
}

#[derive(Debug, Clone, Copy)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub book_id: BookId,
}

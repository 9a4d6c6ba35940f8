use crate::domain::favorite::Favorite;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
}

impl From<Favorite> for FavoriteDto {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id.into(),
            user_id: favorite.user_id.into(),
            book_id: favorite.book_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnfavoriteDto {
    /// Number of favorite records removed for the pair.
    pub removed: u64,
}

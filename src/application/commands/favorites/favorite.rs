// src/application/commands/favorites/favorite.rs
use super::FavoriteCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FavoriteDto},
        error::ApplicationResult,
    },
    domain::favorite::NewFavorite,
};

pub struct FavoriteBookCommand {
    pub book_id: i64,
}

impl FavoriteCommandService {
    /// Records a new favorite even when the pair is already recorded.
    pub async fn favorite_book(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteBookCommand,
    ) -> ApplicationResult<FavoriteDto> {
        let book_id = self.ensure_book_exists(command.book_id).await?;
        let favorite = self
            .favorite_repo
            .insert(NewFavorite {
                user_id: actor.id,
                book_id,
            })
            .await?;

        tracing::debug!(
            favorite_id = i64::from(favorite.id),
            book_id = command.book_id,
            user_id = i64::from(actor.id),
            "book favorited"
        );
        Ok(favorite.into())
    }
}

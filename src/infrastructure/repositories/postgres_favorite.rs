// src/infrastructure/repositories/postgres_favorite.rs
use super::map_sqlx;
use super::postgres_book::{BOOK_COLUMNS, BookRow, hydrate_books};
use crate::domain::book::{Book, BookId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite::{Favorite, FavoriteId, FavoriteRepository, NewFavorite};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FavoriteRow {
    id: i64,
    user_id: i64,
    book_id: i64,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = DomainError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        Ok(Favorite {
            id: FavoriteId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            book_id: BookId::new(row.book_id)?,
        })
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn insert(&self, favorite: NewFavorite) -> DomainResult<Favorite> {
        let row = sqlx::query_as::<_, FavoriteRow>(
            "INSERT INTO favorites (user_id, book_id) VALUES ($1, $2)
             RETURNING id, user_id, book_id",
        )
        .bind(i64::from(favorite.user_id))
        .bind(i64::from(favorite.book_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Favorite::try_from(row)
    }

    async fn delete_pair(&self, user_id: UserId, book_id: BookId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND book_id = $2")
            .bind(i64::from(user_id))
            .bind(i64::from(book_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn list_books_for_user(&self, user_id: UserId) -> DomainResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books
             WHERE id IN (SELECT book_id FROM favorites WHERE user_id = $1)
             ORDER BY date_added DESC, id DESC"
        ))
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        hydrate_books(&self.pool, rows).await
    }
}

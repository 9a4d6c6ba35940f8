use crate::domain::errors::DomainError;

const CNT_BOOK_SLUG: &str = "books_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_TOKEN_DIGEST: &str = "users_token_digest_key";
const CNT_BOOK_CATEGORY_BOOK: &str = "book_categories_book_id_fkey";
const CNT_BOOK_CATEGORY_CATEGORY: &str = "book_categories_category_id_fkey";
const CNT_FAVORITE_USER: &str = "favorites_user_id_fkey";
const CNT_FAVORITE_BOOK: &str = "favorites_book_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => map_database_error(
            db_err.constraint(),
            db_err.code().as_deref(),
            db_err.message(),
        ),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Classify a database error by constraint name, then by SQLSTATE.
fn map_database_error(constraint: Option<&str>, code: Option<&str>, message: &str) -> DomainError {
    if let Some(constraint) = constraint {
        return match constraint {
            CNT_BOOK_SLUG | CNT_CATEGORY_SLUG => {
                DomainError::SlugCollision(format!("{constraint}: {message}"))
            }
            CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
            CNT_USER_TOKEN_DIGEST => {
                DomainError::Conflict("token digest already registered".into())
            }
            CNT_BOOK_CATEGORY_BOOK | CNT_FAVORITE_BOOK => {
                DomainError::NotFound("book not found".into())
            }
            CNT_BOOK_CATEGORY_CATEGORY => DomainError::NotFound("category not found".into()),
            CNT_FAVORITE_USER => DomainError::NotFound("user not found".into()),
            other => DomainError::Persistence(format!("database constraint violation: {other}")),
        };
    }

    match code {
        Some("23505") => DomainError::Conflict("unique constraint violated".into()),
        Some("23503") => DomainError::NotFound("referenced record not found".into()),
        Some("23514") => DomainError::Validation("check constraint violated".into()),
        _ => DomainError::Persistence(message.to_string()),
    }
}

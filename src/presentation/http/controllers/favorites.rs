// src/presentation/http/controllers/favorites.rs
use crate::application::{
    commands::favorites::{FavoriteBookCommand, UnfavoriteBookCommand},
    dto::{BookDto, FavoriteDto, UnfavoriteDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    responses(
        (status = 200, description = "The caller's favorite books, newest first.", body = [BookDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Favorites"
)]
pub async fn list_favorites(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<BookDto>>> {
    state
        .services
        .favorite_queries
        .list_favorites(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/books/{id}/favorite",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 201, description = "Favorite recorded.", body = FavoriteDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Favorites"
)]
pub async fn favorite_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<(StatusCode, Json<FavoriteDto>)> {
    state
        .services
        .favorite_commands
        .favorite_book(&user, FavoriteBookCommand { book_id: id })
        .await
        .into_http()
        .map(|favorite| (StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}/favorite",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Favorites for the book removed.", body = UnfavoriteDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Favorites"
)]
pub async fn unfavorite_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<UnfavoriteDto>> {
    state
        .services
        .favorite_commands
        .unfavorite_book(&user, UnfavoriteBookCommand { book_id: id })
        .await
        .into_http()
        .map(Json)
}

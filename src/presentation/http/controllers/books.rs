// src/presentation/http/controllers/books.rs
use crate::application::{
    commands::books::{CreateBookCommand, DeleteBookCommand, UpdateBookCommand},
    dto::BookDto,
    queries::books::{GetBookByIdQuery, GetBookBySlugQuery, ListBooksQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{BookListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookListParams {
    /// 1-based page number. Defaults to 1.
    #[serde(default)]
    pub page: Option<u32>,
    /// Items per page. Defaults to 20, capped at 100.
    #[serde(default)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    /// Explicit slug. Generated from the title when absent or empty.
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// `null` clears the image; omit the field to leave it unchanged.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    pub category_ids: Option<Vec<i64>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    get,
    path = "/api/v1/books",
    params(BookListParams),
    responses(
        (status = 200, description = "Books, newest first.", body = BookListResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Books"
)]
pub async fn list_books(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BookListParams>,
) -> HttpResult<Json<BookListResponse>> {
    let query = ListBooksQuery {
        page: params.page.unwrap_or(1),
        page_size: params.page_size.unwrap_or(0),
    };

    state
        .services
        .book_queries
        .list_books(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book detail.", body = BookDto),
        (status = 400, description = "Invalid identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Books"
)]
pub async fn get_book(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<BookDto>> {
    state
        .services
        .book_queries
        .get_book_by_id(GetBookByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/books/by-slug/{slug}",
    params(("slug" = String, Path, description = "Book slug")),
    responses(
        (status = 200, description = "Book detail.", body = BookDto),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Books"
)]
pub async fn get_book_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BookDto>> {
    state
        .services
        .book_queries
        .get_book_by_slug(GetBookBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created.", body = BookDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Books"
)]
pub async fn create_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateBookRequest>,
) -> HttpResult<(StatusCode, Json<BookDto>)> {
    let command = CreateBookCommand {
        title: payload.title,
        author: payload.author,
        description: payload.description,
        url: payload.url,
        image: payload.image,
        category_ids: payload.category_ids,
        slug: payload.slug,
    };

    state
        .services
        .book_commands
        .create_book(&user, command)
        .await
        .into_http()
        .map(|book| (StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/books/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated. The slug never changes.", body = BookDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Book or category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Books"
)]
pub async fn update_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookRequest>,
) -> HttpResult<Json<BookDto>> {
    let command = UpdateBookCommand {
        id,
        title: payload.title,
        author: payload.author,
        description: payload.description,
        url: payload.url,
        image: payload.image,
        category_ids: payload.category_ids,
    };

    state
        .services
        .book_commands
        .update_book(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Books"
)]
pub async fn delete_book(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .book_commands
        .delete_book(&user, DeleteBookCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

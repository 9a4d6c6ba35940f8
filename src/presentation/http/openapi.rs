// src/presentation/http/openapi.rs
use crate::application::dto::{BookDto, Page};
use axum::{Router, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

mod handlers;

pub use handlers::serve_openapi;

pub(crate) const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// One page of the book index.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub items: Vec<BookDto>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_more: bool,
}

impl From<Page<BookDto>> for BookListResponse {
    fn from(page: Page<BookDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            has_more: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::books::list_books,
        crate::presentation::http::controllers::books::get_book,
        crate::presentation::http::controllers::books::get_book_by_slug,
        crate::presentation::http::controllers::books::create_book,
        crate::presentation::http::controllers::books::update_book,
        crate::presentation::http::controllers::books::delete_book,
        crate::presentation::http::controllers::favorites::list_favorites,
        crate::presentation::http::controllers::favorites::favorite_book,
        crate::presentation::http::controllers::favorites::unfavorite_book,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category_by_slug,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::rename_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::delete_me,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            BookListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::books::BookListParams,
            crate::presentation::http::controllers::books::CreateBookRequest,
            crate::presentation::http::controllers::books::UpdateBookRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::RenameCategoryRequest,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::application::dto::BookDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::FavoriteDto,
            crate::application::dto::UnfavoriteDto,
            crate::application::dto::UserDto,
            crate::application::dto::RegisteredUserDto
        )
    ),
    tags(
        (name = "Books", description = "Book catalog endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Favorites", description = "Per-user favorite books"),
        (name = "Users", description = "Registration and account endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Shelf API",
        description = "Book catalog with categories and favorites",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("opaque".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

struct RenderedDocument {
    bytes: Bytes,
    etag: String,
}

static RENDERED: OnceLock<RenderedDocument> = OnceLock::new();

fn rendered() -> &'static RenderedDocument {
    RENDERED.get_or_init(|| {
        let bytes = match serde_json::to_vec(&ApiDoc::openapi()) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(error = %err, "failed to render OpenAPI document");
                b"{}".to_vec()
            }
        };
        let etag = format!("\"{}\"", blake3::hash(&bytes).to_hex());
        RenderedDocument {
            bytes: Bytes::from(bytes),
            etag,
        }
    })
}

/// The serialized document, rendered once per process.
pub fn openapi_bytes() -> Bytes {
    rendered().bytes.clone()
}

/// Strong ETag: quoted BLAKE3 hex digest of [`openapi_bytes`].
pub fn openapi_etag() -> &'static str {
    rendered().etag.as_str()
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(handlers::serve_openapi))
        .merge(redoc)
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

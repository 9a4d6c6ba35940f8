// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use shelf_core::application::ports::time::Clock;
use shelf_core::application::services::ApplicationServices;
use shelf_core::infrastructure::util::DefaultSlugGenerator;
use shelf_core::presentation::http::routes::build_router;
use shelf_core::presentation::http::state::HttpState;

use super::mocks::{DummyClock, MemoryBookRepo, MemoryStore, SequentialTokenIssuer};

pub const DEFAULT_SLUG_ATTEMPTS: u32 = 5;

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub books: MemoryBookRepo,
}

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request(method, uri, token, body))
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn raw(&self, req: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    /// Register `username` and return its bearer token.
    pub async fn register_user(&self, username: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/api/v1/users",
                None,
                Some(serde_json::json!({ "username": username })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["token"].as_str().expect("token").to_string()
    }

    pub async fn create_category(&self, token: &str, name: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/v1/categories",
                Some(token),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create category failed: {body}");
        body
    }

    pub async fn create_book(&self, token: &str, payload: Value) -> (StatusCode, Value) {
        self.send("POST", "/api/v1/books", Some(token), Some(payload))
            .await
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub fn book_payload(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "author": "Frank Herbert",
        "description": "Desert planet.",
        "url": "https://example.com/books/dune",
    })
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(Arc::new(DummyClock), DEFAULT_SLUG_ATTEMPTS)
}

pub fn build_test_app_with(clock: Arc<dyn Clock>, slug_attempts: u32) -> TestApp {
    let store = MemoryStore::new();
    let books = store.books();

    let services = Arc::new(ApplicationServices::new(
        Arc::new(store.users()),
        Arc::new(store.categories()),
        Arc::new(books.clone()),
        Arc::new(books.clone()),
        Arc::new(store.favorites()),
        Arc::new(SequentialTokenIssuer::default()),
        clock,
        Arc::new(DefaultSlugGenerator),
        slug_attempts,
    ));

    TestApp {
        router: build_router(HttpState { services }, &[]),
        store,
        books,
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(
        err_field, expected_error,
        "unexpected error field: {}",
        err_field
    );
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

/// GET /openapi.json. Answers `304 Not Modified` when `If-None-Match`
/// names the current ETag (or `*`).
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    let etag = super::openapi_etag();
    if inm_matches(&headers, etag) {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    (
        StatusCode::OK,
        [
            (header::ETAG, etag),
            (header::CONTENT_TYPE, super::OPENAPI_CONTENT_TYPE_JSON),
        ],
        super::openapi_bytes(),
    )
        .into_response()
}

/// Opaque part of an entity tag, without the weak prefix and quotes.
pub(super) fn etag_value(token: &str) -> &str {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// Weak comparison against every candidate in `If-None-Match`.
pub(super) fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(raw) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let raw = raw.trim();
    if raw == "*" {
        return true;
    }
    let actual = etag_value(actual);
    raw.split(',').any(|candidate| etag_value(candidate) == actual)
}

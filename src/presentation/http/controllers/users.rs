// src/presentation/http/controllers/users.rs
use crate::application::{commands::users::RegisterUserCommand, dto::RegisteredUserDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered. The token is shown only once.", body = RegisteredUserDto),
        (status = 400, description = "Invalid username.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Username already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<RegisteredUserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(|registered| (StatusCode::CREATED, Json(registered)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Account and favorites deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn delete_me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .user_commands
        .delete_current_user(&user)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

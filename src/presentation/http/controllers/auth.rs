// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::session::{clear_session_cookie, session_cookie};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const REGISTERED_MESSAGE: &str = "user created";

/// Missing fields deserialize as empty strings so the service can answer
/// with a single validation message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created.", body = RegisterResponse),
        (status = 400, description = "Missing fields or email already registered.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<RegisterResponse>)> {
    let command = RegisterUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let registered = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: REGISTERED_MESSAGE.to_string(),
            user_id: registered.user_id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued; also set as an HttpOnly cookie.", body = LoginResponse),
        (status = 400, description = "Missing fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security([]),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<impl IntoResponse> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    let cookie = session_cookie(&result.token.token, &state.session)
        .map_err(|err| HttpError::internal(&err.to_string()))?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            token: result.token,
            user: result.user,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 204, description = "Session cookie cleared.")
    ),
    security([]),
    tag = "Auth"
)]
pub async fn logout(Extension(state): Extension<HttpState>) -> HttpResult<impl IntoResponse> {
    let cookie = clear_session_cookie(&state.session)
        .map_err(|err| HttpError::internal(&err.to_string()))?;
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

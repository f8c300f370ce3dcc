// src/presentation/http/extractors.rs
use crate::{
    application::dto::AuthenticatedUser,
    presentation::http::{session::session_token, state::HttpState},
};
use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use super::error::HttpError;

/// JSON body whose rejections answer 400 with the usual error payload.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Like [`Authenticated`] but an absent, expired or forged token simply
/// yields `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts
        .extensions
        .get::<HttpState>()
        .cloned()
        .ok_or_else(|| HttpError::internal("application state missing"))
}

async fn resolve(parts: &Parts) -> Result<AuthenticatedUser, HttpError> {
    // Already verified by the session gate.
    if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
        return Ok(user.clone());
    }

    let state = app_state(parts)?;
    let token =
        session_token(&parts.headers).ok_or_else(|| HttpError::unauthorized("missing session"))?;

    state
        .services
        .token_manager()
        .authenticate(&token)
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match resolve(parts).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(err) if err.status().is_server_error() => Err(err),
            Err(_) => Ok(Self(None)),
        }
    }
}

// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, pages},
    middleware::{rate_limit_layer, session_gate},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, patch, post},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limit: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let mut credentials = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login));
    if enable_rate_limit {
        credentials = credentials.layer(rate_limit_layer());
    }

    Router::new()
        .route("/", get(pages::home))
        .route("/dashboard", get(pages::dashboard))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        .route("/health", get(health))
        .route("/api/logout", post(auth::logout))
        .route("/api/public/articles", get(articles::list_published))
        .route(
            "/api/articles",
            get(articles::list_own).post(articles::create_article),
        )
        .route("/api/articles/{id}", patch(articles::set_publish_state))
        .merge(credentials)
        .merge(openapi::docs_router())
        .layer(middleware::from_fn(session_gate))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

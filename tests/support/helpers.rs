// tests/support/helpers.rs
use super::builders::user;
use super::mocks::{
    FakeTokenManager, FixedClock, InMemoryArticleRepo, InMemoryStore, InMemoryUserRepo,
    PrefixPasswordHasher,
};
use article_portal::application::services::ApplicationServices;
use article_portal::presentation::http::{
    routes::build_router_with_rate_limiter, session::SessionSettings, state::HttpState,
};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Router over an empty store.
pub fn empty_app() -> TestApp {
    app_with_store(Arc::new(InMemoryStore::default()))
}

/// Router over a store holding Ana (id 1) and Budi (id 2), matching the
/// fake session tokens.
pub fn seeded_app() -> TestApp {
    let store = Arc::new(InMemoryStore::default());
    store.push_user(user(1, "Ana", "ana@x.com", "pw123456"));
    store.push_user(user(2, "Budi", "budi@x.com", "secret99"));
    app_with_store(store)
}

pub fn services_for(store: &Arc<InMemoryStore>) -> Arc<ApplicationServices> {
    let articles = Arc::new(InMemoryArticleRepo(Arc::clone(store)));
    Arc::new(ApplicationServices::new(
        Arc::new(InMemoryUserRepo(Arc::clone(store))),
        articles.clone(),
        articles,
        Arc::new(PrefixPasswordHasher),
        Arc::new(FakeTokenManager),
        Arc::new(FixedClock),
    ))
}

pub fn app_with_store(store: Arc<InMemoryStore>) -> TestApp {
    let state = HttpState {
        services: services_for(&store),
        session: Arc::new(SessionSettings::default()),
        allowed_origins: Arc::from(vec!["http://localhost:3000".to_string()]),
    };
    TestApp {
        router: build_router_with_rate_limiter(state, false),
        store,
    }
}

pub async fn read_body(resp: Response) -> (StatusCode, HeaderMap, Vec<u8>) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    (status, parts.headers, bytes.to_vec())
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let (status, _, bytes) = read_body(resp).await;
    let json = serde_json::from_slice(&bytes).expect("expected json body");
    (status, json)
}

pub async fn read_html(resp: Response) -> (StatusCode, String) {
    let (status, headers, bytes) = read_body(resp).await;
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
    (status, String::from_utf8(bytes).expect("utf-8 body"))
}

/// Assert that a response is an error JSON with the expected status and
/// canonical reason, and return its message.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let (_, headers, bytes) = read_body(resp).await;
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    msg_field.to_string()
}

// src/presentation/http/controllers/pages.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::session::safe_callback;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views;
use axum::{Extension, extract::Query, response::Html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

pub async fn home(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_published()
        .await
        .into_http()?;
    Ok(Html(views::home_page(user.as_ref(), &articles)))
}

pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_own(&user)
        .await
        .into_http()?;
    Ok(Html(views::dashboard_page(&user, &articles)))
}

pub async fn login(
    MaybeAuthenticated(user): MaybeAuthenticated,
    Query(query): Query<LoginQuery>,
) -> Html<String> {
    let callback = safe_callback(query.callback_url.as_deref());
    Html(views::login_page(user.as_ref(), callback))
}

pub async fn register(MaybeAuthenticated(user): MaybeAuthenticated) -> Html<String> {
    Html(views::register_page(user.as_ref()))
}

// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, SetPublishStateCommand},
    dto::{ArticleDto, PublicArticleDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub published: bool,
}

#[utoipa::path(
    get,
    path = "/api/public/articles",
    responses(
        (status = 200, description = "Published articles, newest first.", body = [PublicArticleDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Articles"
)]
pub async fn list_published(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublicArticleDto>>> {
    state
        .services
        .article_queries
        .list_published()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "The session user's articles, drafts included.", body = [ArticleDto]),
        (status = 401, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_own(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_own(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created for the session user.", body = ArticleDto),
        (status = 400, description = "Blank title or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        excerpt: payload.excerpt,
        published: payload.published,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Publish flag updated.", body = ArticleDto),
        (status = 400, description = "Malformed body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article owned by the session user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<PublishRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SetPublishStateCommand {
        id,
        published: payload.published,
    };

    state
        .services
        .article_commands
        .set_publish_state(&user, command)
        .await
        .into_http()
        .map(Json)
}

use crate::domain::article::{Article, ArticleWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            excerpt: article.excerpt.map(Into::into),
            published: article.published,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicArticleDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub author: AuthorDto,
}

impl From<ArticleWithAuthor> for PublicArticleDto {
    fn from(value: ArticleWithAuthor) -> Self {
        Self {
            article: value.article.into(),
            author: AuthorDto {
                name: value.author_name.into(),
                email: value.author_email.into(),
            },
        }
    }
}

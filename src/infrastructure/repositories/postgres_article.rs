// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWithAuthor, ArticleWriteRepository, NewArticle, PublishStateUpdate,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, UserId, UserName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str =
    "id, title, content, excerpt, published, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    excerpt: Option<String>,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            excerpt: ArticleExcerpt::from_input(row.excerpt),
            published: row.published,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_name: String,
    author_email: String,
}

impl TryFrom<ArticleWithAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        Ok(ArticleWithAuthor {
            article: Article::try_from(row.article)?,
            author_name: UserName::new(row.author_name)?,
            author_email: Email::new(row.author_email)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            excerpt,
            published,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, excerpt, published, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_ref().map(ArticleExcerpt::as_str))
        .bind(published)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn set_published(&self, update: PublishStateUpdate) -> DomainResult<Article> {
        let PublishStateUpdate {
            id,
            published,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET published = $1, updated_at = $2
             WHERE id = $3
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(published)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let rows = sqlx::query_as::<_, ArticleWithAuthorRow>(
            "SELECT a.id, a.title, a.content, a.excerpt, a.published, a.author_id,
                    a.created_at, a.updated_at,
                    u.name AS author_name, u.email AS author_email
             FROM articles a
             JOIN users u ON u.id = a.author_id
             WHERE a.published = TRUE
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleWithAuthor::try_from).collect()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

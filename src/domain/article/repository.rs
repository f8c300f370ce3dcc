use crate::domain::article::entity::{Article, ArticleWithAuthor, NewArticle, PublishStateUpdate};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Writes `published` and `updated_at` only. No version check is made:
    /// concurrent writers race and the last statement wins.
    async fn set_published(&self, update: PublishStateUpdate) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Published articles, newest first.
    async fn list_published(&self) -> DomainResult<Vec<ArticleWithAuthor>>;
    /// Every article of one author regardless of state, newest first.
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
}

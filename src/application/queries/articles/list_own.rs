use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Dashboard listing: every article of the session user, drafts included.
    pub async fn list_own(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_by_author(actor.id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}

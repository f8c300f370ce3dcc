use super::ArticleQueryService;
use crate::{
    application::{dto::PublicArticleDto, error::ApplicationResult},
    domain::article::specifications::{ArticleSpecification, CanViewArticleSpec},
};

impl ArticleQueryService {
    /// Public listing: no identity is consulted, so only published articles
    /// pass the visibility rule.
    pub async fn list_published(&self) -> ApplicationResult<Vec<PublicArticleDto>> {
        let records = self.read_repo.list_published().await?;

        Ok(records
            .into_iter()
            .filter(|record| CanViewArticleSpec::new(&record.article, None).is_satisfied())
            .map(Into::into)
            .collect())
    }
}

//! The authorization gate every article write goes through.
//!
//! Authentication has already happened by the time these functions run (the
//! caller holds an [`AuthenticatedUser`]). What remains is ownership: an
//! article that does not exist and an article owned by someone else produce
//! the same `NotFound`, so callers cannot probe for foreign ids.

use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleId,
        specifications::{ArticleSpecification, OwnsArticleSpec},
    },
};

pub const ARTICLE_NOT_FOUND: &str = "article not found";

/// Allow when the article exists and belongs to `actor`, deny otherwise.
pub fn ensure_owned(
    actor: &AuthenticatedUser,
    article: Option<Article>,
) -> ApplicationResult<Article> {
    match article {
        Some(article) if OwnsArticleSpec::new(&article, actor.id).is_satisfied() => Ok(article),
        _ => Err(ApplicationError::not_found(ARTICLE_NOT_FOUND)),
    }
}

impl ArticleCommandService {
    /// Resolve a raw path identifier to an article owned by `actor`.
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        raw_id: &str,
    ) -> ApplicationResult<Article> {
        let Ok(id) = ArticleId::parse(raw_id) else {
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        };

        let article = self.read_repo.find_by_id(id).await?;
        ensure_owned(actor, article)
    }
}

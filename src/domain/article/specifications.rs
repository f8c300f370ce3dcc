use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Ownership is the only authorization rule for article writes.
pub struct OwnsArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> OwnsArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for OwnsArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_owned_by(self.user_id)
    }
}

/// Drafts are visible to their owner only; published articles to anyone.
pub struct CanViewArticleSpec<'a> {
    article: &'a Article,
    viewer: Option<UserId>,
}

impl<'a> CanViewArticleSpec<'a> {
    pub fn new(article: &'a Article, viewer: Option<UserId>) -> Self {
        Self { article, viewer }
    }
}

impl ArticleSpecification for CanViewArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.published
            || self
                .viewer
                .is_some_and(|viewer| OwnsArticleSpec::new(self.article, viewer).is_satisfied())
    }
}

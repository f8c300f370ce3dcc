// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleExcerpt, ArticleId, ArticleTitle,
};
use crate::domain::user::{Email, UserId, UserName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<ArticleExcerpt>,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Only the flag and the modification time change; authorship and
    /// content stay as they were.
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        self.published = published;
        self.updated_at = now;
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Card text: the excerpt when present, otherwise the first `max_chars`
/// characters of the content. `...` marks a cut.
pub fn summarize(excerpt: Option<&str>, content: &str, max_chars: usize) -> String {
    if let Some(excerpt) = excerpt.filter(|e| !e.trim().is_empty()) {
        return excerpt.to_string();
    }

    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<ArticleExcerpt>,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub id: ArticleId,
    pub published: bool,
    pub updated_at: DateTime<Utc>,
}

impl PublishStateUpdate {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: article.id,
            published: article.published,
            updated_at: article.updated_at,
        }
    }
}

/// A published article joined with the author's public identity.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author_name: UserName,
    pub author_email: Email,
}

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleExcerpt, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let excerpt = ArticleExcerpt::from_input(command.excerpt);
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content,
            excerpt,
            published: command.published,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, author_id = %actor.id, "article created");
        Ok(created.into())
    }
}

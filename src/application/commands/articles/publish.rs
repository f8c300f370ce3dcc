use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::PublishStateUpdate,
};

pub struct SetPublishStateCommand {
    /// Raw identifier as it appeared in the request path.
    pub id: String,
    pub published: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_owned(actor, &command.id).await?;

        article.set_published(command.published, self.clock.now());

        // Last write wins: no version check guards concurrent toggles.
        let updated = self
            .write_repo
            .set_published(PublishStateUpdate::from_article(&article))
            .await?;
        Ok(updated.into())
    }
}

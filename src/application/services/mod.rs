// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, users::UserCommandService},
        ports::{ClockPort, PasswordHasherPort, TokenManagerPort},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            user_commands,
            article_commands,
            article_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<TokenManagerPort> {
        Arc::clone(&self.token_manager)
    }
}

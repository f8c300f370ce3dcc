use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}

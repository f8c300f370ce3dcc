mod create;
pub mod ownership;
mod publish;
mod service;

pub use create::CreateArticleCommand;
pub use publish::SetPublishStateCommand;
pub use service::ArticleCommandService;

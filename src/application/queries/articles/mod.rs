mod list_own;
mod list_published;
mod service;

pub use service::ArticleQueryService;

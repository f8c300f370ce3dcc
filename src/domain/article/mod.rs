pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleWithAuthor, NewArticle, PublishStateUpdate, summarize};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleExcerpt, ArticleId, ArticleTitle};

pub mod articles;
pub mod auth;
pub mod users;

pub use articles::{ArticleDto, AuthorDto, PublicArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use users::{RegisteredUserDto, UserDto};

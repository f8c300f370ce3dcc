// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;

pub use repos::{InMemoryArticleRepo, InMemoryStore, InMemoryUserRepo};
pub use security::{
    AUTHOR_TOKEN, EXPIRED_TOKEN, FakeTokenManager, OTHER_TOKEN, PrefixPasswordHasher,
};
pub use time::{FixedClock, fixed_now};

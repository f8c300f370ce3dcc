// tests/support/builders.rs
use super::mocks::fixed_now;
use article_portal::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleId, ArticleTitle,
};
use article_portal::domain::user::{Email, PasswordHash, User, UserId, UserName};
use axum::body::Body;
use axum::http::{Method, Request, header};
use chrono::Duration;
use serde_json::Value;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    excerpt: Option<String>,
    published: bool,
    author_id: i64,
    age_minutes: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            content: "Test content".into(),
            excerpt: None,
            published: false,
            author_id: 1,
            age_minutes: 0,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Created this many minutes before the fixed clock.
    pub fn age_minutes(mut self, minutes: i64) -> Self {
        self.age_minutes = minutes;
        self
    }

    pub fn build(self) -> Article {
        let created_at = fixed_now() - Duration::minutes(self.age_minutes);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            excerpt: ArticleExcerpt::from_input(self.excerpt),
            published: self.published,
            author_id: UserId::new(self.author_id).unwrap(),
            created_at,
            updated_at: created_at,
        }
    }
}

pub fn user(id: i64, name: &str, email: &str, password: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: UserName::new(name).unwrap(),
        email: Email::new(email).unwrap(),
        password_hash: PasswordHash::new(format!("hash::{password}")).unwrap(),
        created_at: fixed_now(),
    }
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn page_request(uri: &str, cookie_token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = cookie_token {
        builder = builder.header(header::COOKIE, format!("portal_session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

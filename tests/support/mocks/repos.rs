// tests/support/mocks/repos.rs
use article_portal::domain::{
    article::{
        Article, ArticleId, ArticleReadRepository, ArticleWithAuthor, ArticleWriteRepository,
        NewArticle, PublishStateUpdate,
    },
    errors::{DomainError, DomainResult},
    user::{Email, NewUser, User, UserId, UserRepository},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Rows shared by the in-memory repositories, standing in for the two tables.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub users: Mutex<Vec<User>>,
    pub articles: Mutex<Vec<Article>>,
}

impl InMemoryStore {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| i64::from(article.id) == id)
            .cloned()
    }

    pub fn push_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn push_article(&self, article: Article) {
        self.articles.lock().unwrap().push(article);
    }
}

#[derive(Clone)]
pub struct InMemoryUserRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.0.users.lock().unwrap();
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("users_email_key".into()));
        }
        let id = i64::try_from(users.len()).unwrap() + 1;
        let user = User {
            id: UserId::new(id)?,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.0.user_by_email(email.as_str()))
    }
}

#[derive(Clone)]
pub struct InMemoryArticleRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.0.articles.lock().unwrap();
        let id = articles
            .iter()
            .map(|existing| i64::from(existing.id))
            .max()
            .unwrap_or(0)
            + 1;
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            excerpt: article.excerpt,
            published: article.published,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(created.clone());
        Ok(created)
    }

    async fn set_published(&self, update: PublishStateUpdate) -> DomainResult<Article> {
        let mut articles = self.0.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.published = update.published;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.0.article(id.into()))
    }

    async fn list_published(&self) -> DomainResult<Vec<ArticleWithAuthor>> {
        let users = self.0.users.lock().unwrap().clone();
        let mut rows: Vec<ArticleWithAuthor> = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.published)
            .filter_map(|article| {
                let author = users.iter().find(|user| user.id == article.author_id)?;
                Some(ArticleWithAuthor {
                    article: article.clone(),
                    author_name: author.name.clone(),
                    author_email: author.email.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            (b.article.created_at, b.article.id.0).cmp(&(a.article.created_at, a.article.id.0))
        });
        Ok(rows)
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let mut rows: Vec<Article> = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.author_id == author_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        Ok(rows)
    }
}

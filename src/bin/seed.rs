// src/bin/seed.rs
//! Populate a development database with a demo author and sample articles.

use anyhow::Result;
use article_portal::application::ports::{security::PasswordHasher, time::Clock};
use article_portal::config::AppConfig;
use article_portal::domain::{
    article::{
        ArticleContent, ArticleExcerpt, ArticleReadRepository, ArticleTitle,
        ArticleWriteRepository, NewArticle,
    },
    user::{Email, NewUser, PasswordHash, User, UserName, UserRepository},
};
use article_portal::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresUserRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
};

const DEMO_EMAIL: &str = "test@example.com";
const DEMO_NAME: &str = "Test User";
const DEMO_PASSWORD: &str = "password123";

struct SampleArticle {
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    published: bool,
}

const SAMPLES: [SampleArticle; 3] = [
    SampleArticle {
        title: "Getting Started with Axum",
        excerpt: "A tour of routing, extractors and middleware in a modern Rust web framework.",
        content: "Axum builds on tokio, tower and hyper to offer an ergonomic way to write web services. \
                  Handlers are plain async functions whose arguments are extractors, and cross-cutting \
                  concerns such as tracing, compression or authentication are expressed as tower layers. \
                  This article walks through a small service and shows how the pieces fit together.",
        published: true,
    },
    SampleArticle {
        title: "Web Performance Tips for Developers",
        excerpt: "Practical techniques to make pages load faster and rank better.",
        content: "Page speed shapes both user experience and search ranking. We look at image \
                  optimisation, lazy loading, response compression and caching headers, and how each \
                  one shortens the time until a page becomes usable.",
        published: true,
    },
    SampleArticle {
        title: "Draft: A Complete Guide to Rust Error Handling",
        excerpt: "From Result and the question mark operator to layered error enums.",
        content: "Rust makes failure explicit in function signatures. This guide covers Result, the ? \
                  operator, thiserror for library errors and anyhow at application boundaries.",
        published: false,
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    article_portal::init_tracing();

    let database_url = AppConfig::database_url_from_env();
    let pool = database::init_pool(&database_url).await?;
    database::run_migrations(&pool).await?;

    let users = PostgresUserRepository::new(pool.clone());
    let writer = PostgresArticleWriteRepository::new(pool.clone());
    let reader = PostgresArticleReadRepository::new(pool);
    let clock = SystemClock;

    let author = ensure_demo_user(&users, &clock).await?;

    if reader.list_by_author(author.id).await?.is_empty() {
        for sample in &SAMPLES {
            let now = clock.now();
            let article = writer
                .insert(NewArticle {
                    title: ArticleTitle::new(sample.title)?,
                    content: ArticleContent::new(sample.content)?,
                    excerpt: ArticleExcerpt::from_input(Some(sample.excerpt.to_string())),
                    published: sample.published,
                    author_id: author.id,
                    created_at: now,
                    updated_at: now,
                })
                .await?;
            tracing::info!(article_id = %article.id, published = sample.published, "sample article inserted");
        }
    } else {
        tracing::info!(user_id = %author.id, "sample articles already present");
    }

    tracing::info!("database seeded");
    Ok(())
}

async fn ensure_demo_user(users: &PostgresUserRepository, clock: &SystemClock) -> Result<User> {
    let email = Email::new(DEMO_EMAIL)?;
    if let Some(existing) = users.find_by_email(&email).await? {
        tracing::info!(user_id = %existing.id, "demo user already exists");
        return Ok(existing);
    }

    let hashed = Argon2PasswordHasher.hash(DEMO_PASSWORD).await?;
    let user = users
        .insert(NewUser::new(
            UserName::new(DEMO_NAME)?,
            email,
            PasswordHash::new(hashed)?,
            clock.now(),
        )?)
        .await?;
    tracing::info!(user_id = %user.id, "demo user created");
    Ok(user)
}

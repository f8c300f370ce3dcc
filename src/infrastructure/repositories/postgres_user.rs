// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, NewUser, PasswordHash, User, UserId, UserName, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: UserName::new(row.name)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            password_hash,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at
             FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

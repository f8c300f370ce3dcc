// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, UserName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: UserName,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            name,
            email,
            password_hash,
            created_at,
        })
    }
}

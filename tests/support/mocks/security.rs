// tests/support/mocks/security.rs
use article_portal::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use article_portal::domain::user::UserId;
use async_trait::async_trait;
use chrono::Duration;

/// Session of user 1 (Ana).
pub const AUTHOR_TOKEN: &str = "author-token";
/// Session of user 2 (Budi).
pub const OTHER_TOKEN: &str = "other-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

const ISSUED_PREFIX: &str = "issued-";

/// Maps fixed token strings to users. Tokens it issues look like
/// `issued-<user id>` and authenticate back to that id.
#[derive(Clone, Debug, Default)]
pub struct FakeTokenManager;

fn session_user(id: i64, name: &str, email: &str) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        name: name.into(),
        email: email.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("{ISSUED_PREFIX}{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            AUTHOR_TOKEN => Ok(session_user(1, "Ana", "ana@x.com")),
            OTHER_TOKEN => Ok(session_user(2, "Budi", "budi@x.com")),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            other => other
                .strip_prefix(ISSUED_PREFIX)
                .and_then(|id| id.parse::<i64>().ok())
                .map(|id| session_user(id, "issued", "issued@x.com"))
                .ok_or_else(|| ApplicationError::unauthorized("invalid token")),
        }
    }
}

/// Deterministic stand-in for Argon2: `hash::<password>`.
#[derive(Clone, Debug, Default)]
pub struct PrefixPasswordHasher;

#[async_trait]
impl PasswordHasher for PrefixPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

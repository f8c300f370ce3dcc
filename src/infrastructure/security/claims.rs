// src/infrastructure/security/claims.rs
//! Turns the facts queried out of a verified session token into an
//! [`AuthenticatedUser`].

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// `user(id, name, email)` fact.
pub type UserClaim = (i64, String, String);
/// `session_window(issued_at, expires_at)` fact, unix seconds.
pub type WindowClaim = (i64, i64);

pub fn parse_claims(
    users: Vec<UserClaim>,
    windows: Vec<WindowClaim>,
) -> ApplicationResult<AuthenticatedUser> {
    let (user_id, name, email) = single(users, "user")?;
    let (issued_secs, expires_secs) = single(windows, "session window")?;

    let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
    let issued_at = timestamp(issued_secs)?;
    let expires_at = timestamp(expires_secs)?;

    if expires_at < issued_at {
        return Err(ApplicationError::unauthorized("invalid session window"));
    }

    Ok(AuthenticatedUser {
        id,
        name,
        email,
        issued_at,
        expires_at,
    })
}

fn single<T>(mut values: Vec<T>, what: &str) -> ApplicationResult<T> {
    if values.len() != 1 {
        return Err(ApplicationError::unauthorized(format!(
            "expected exactly one {what} claim"
        )));
    }
    values
        .pop()
        .ok_or_else(|| ApplicationError::unauthorized(format!("missing {what} claim")))
}

fn timestamp(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthorized("invalid timestamp claim"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_claims() {
        let user = parse_claims(
            vec![(3, "Ana".into(), "ana@x.com".into())],
            vec![(1_700_000_000, 1_700_003_600)],
        )
        .unwrap();

        assert_eq!(i64::from(user.id), 3);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
        assert_eq!(user.expires_at.timestamp() - user.issued_at.timestamp(), 3600);
    }

    #[test]
    fn rejects_missing_or_duplicated_identity() {
        assert!(parse_claims(vec![], vec![(1, 2)]).is_err());
        assert!(
            parse_claims(
                vec![(1, "a".into(), "a@x".into()), (2, "b".into(), "b@x".into())],
                vec![(1, 2)],
            )
            .is_err()
        );
        assert!(parse_claims(vec![(1, "a".into(), "a@x".into())], vec![]).is_err());
    }

    #[test]
    fn rejects_non_positive_ids_and_inverted_windows() {
        assert!(parse_claims(vec![(0, "a".into(), "a@x".into())], vec![(1, 2)]).is_err());
        assert!(parse_claims(vec![(1, "a".into(), "a@x".into())], vec![(5, 2)]).is_err());
    }
}

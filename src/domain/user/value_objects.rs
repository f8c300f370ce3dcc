// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name shown next to an author's articles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Login identity. Stored trimmed and lower-cased so uniqueness is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::Validation("email address is invalid".into()));
        };
        if local.is_empty() || domain.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation("email address is invalid".into()));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        let email = Email::new("  Ana@X.com ").unwrap();
        assert_eq!(email.as_str(), "ana@x.com");
    }

    #[test]
    fn email_requires_local_and_domain_parts() {
        assert!(Email::new("ana").is_err());
        assert!(Email::new("@x.com").is_err());
        assert!(Email::new("ana@").is_err());
        assert!(Email::new("a na@x.com").is_err());
        assert!(Email::new("   ").is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(UserName::new(" \t").is_err());
        assert_eq!(UserName::new(" Ana ").unwrap().as_str(), "Ana");
    }

    #[test]
    fn user_id_must_be_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-4).is_err());
        assert_eq!(i64::from(UserId::new(7).unwrap()), 7);
    }
}

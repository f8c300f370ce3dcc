use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.into(),
            email: user.email.into(),
            created_at: user.created_at,
        }
    }
}

/// Outcome of a registration: the new identifier only, no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredUserDto {
    pub user_id: i64,
}

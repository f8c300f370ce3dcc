use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

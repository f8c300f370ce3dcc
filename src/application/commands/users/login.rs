use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, User},
    },
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation("email and password are required"));
        }

        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            name: user.name.to_string(),
            email: user.email.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let email = match Email::new(email) {
            Ok(email) => email,
            Err(DomainError::Validation(_)) => {
                return Err(ApplicationError::unauthorized("invalid credentials"));
            }
            Err(other) => return Err(other.into()),
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if let Err(err) = self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            tracing::warn!(user_id = %user.id, "login rejected");
            return Err(err);
        }

        Ok(user)
    }
}

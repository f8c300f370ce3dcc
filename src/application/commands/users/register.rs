use super::UserCommandService;
use crate::{
    application::{
        dto::RegisteredUserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, User, UserName},
    },
};

pub const EMAIL_TAKEN_MESSAGE: &str = "email already registered";

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> ApplicationResult<RegisteredUserDto> {
        if [&command.name, &command.email, &command.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ApplicationError::validation("all fields are required"));
        }

        let name = UserName::new(command.name)?;
        let email = Email::new(command.email)?;

        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(name, email, &command.password)
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(RegisteredUserDto {
            user_id: user.id.into(),
        })
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::validation(EMAIL_TAKEN_MESSAGE));
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        name: UserName,
        email: Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(name, email, password_hash, created_at)?;

        // A concurrent registration can still trip the unique index.
        match self.user_repo.insert(new_user).await {
            Ok(user) => Ok(user),
            Err(DomainError::Conflict(_)) => Err(ApplicationError::validation(EMAIL_TAKEN_MESSAGE)),
            Err(other) => Err(other.into()),
        }
    }
}

use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        forms::{
            FormErrors,
            auth::{RegistrationForm, USERNAME_TAKEN},
        },
    },
    domain::{
        errors::DomainError,
        user::{NewUser, PasswordHash, User, Username},
    },
};

pub struct RegisterUserCommand {
    pub form: RegistrationForm,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let valid = command.form.validate()?;
        self.ensure_username_available(&valid.username).await?;

        let user = self
            .create_and_insert_user(valid.username, &valid.password)
            .await?;

        tracing::info!(user_id = i64::from(user.id), "user registered");
        Ok(user.into())
    }

    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(username_taken());
        }
        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, password_hash, self.clock.now());
        // A concurrent registration can still win the unique constraint.
        match self.user_repo.insert(new_user).await {
            Ok(user) => Ok(user),
            Err(DomainError::Conflict(_)) => Err(username_taken()),
            Err(err) => Err(err.into()),
        }
    }
}

fn username_taken() -> ApplicationError {
    let mut errors = FormErrors::new();
    errors.add("username", USERNAME_TAKEN);
    errors.into()
}

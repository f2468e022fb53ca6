use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        forms::{
            FormErrors,
            auth::{INVALID_LOGIN, LoginForm},
        },
    },
    domain::user::{User, Username},
};

pub struct LoginUserCommand {
    pub form: LoginForm,
}

impl UserCommandService {
    /// Form-facing login: bad credentials come back as a non-field form error
    /// so the page can be re-rendered.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AuthenticatedUser> {
        let credentials = command.form.validate()?;
        match self
            .verify_credentials(&credentials.username, &credentials.password)
            .await
        {
            Err(ApplicationError::Unauthorized(_)) => {
                Err(FormErrors::with_non_field(INVALID_LOGIN).into())
            }
            other => other,
        }
    }

    /// Checks a username/password pair. Any mismatch, unknown user or
    /// disabled account is reported as `Unauthorized` without saying which.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.find_and_authenticate_user(username, password).await?;
        tracing::info!(user_id = i64::from(user.id), "credentials accepted");
        Ok(AuthenticatedUser::from(&user))
    }

    async fn find_and_authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let username = Username::new(username).map_err(|_| invalid())?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(invalid)?;

        if !user.is_active {
            tracing::warn!(user_id = i64::from(user.id), "login attempt on disabled account");
            return Err(invalid());
        }

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            tracing::warn!(user_id = i64::from(user.id), "password mismatch");
            return Err(invalid());
        }

        Ok(user)
    }
}

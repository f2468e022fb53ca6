// src/application/forms/auth.rs
use super::{FormErrors, REQUIRED, domain_rule, required};
use crate::domain::user::Username;

pub const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";
pub const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";
pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Only presence is checked here; a malformed username simply fails to
    /// authenticate.
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::new();
        let username = errors.check("username", required(&self.username));
        if self.password.is_empty() {
            errors.add("password", REQUIRED);
        }

        match username {
            Some(username) if errors.is_empty() => Ok(Credentials {
                username,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub username: Username,
    pub password: String,
}

impl RegistrationForm {
    /// Username availability is checked by the caller.
    pub fn validate(&self) -> Result<ValidRegistration, FormErrors> {
        let mut errors = FormErrors::new();

        let username = errors
            .check("username", required(&self.username))
            .and_then(|name| errors.check("username", domain_rule(Username::new(name))));

        if self.password1.is_empty() {
            errors.add("password1", REQUIRED);
        } else if self.password1.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "password1",
                format!(
                    "This password is too short. It must contain at least {MIN_PASSWORD_LENGTH} characters."
                ),
            );
        }

        if self.password2.is_empty() {
            errors.add("password2", REQUIRED);
        } else if self.password1 != self.password2 {
            errors.add("password2", PASSWORD_MISMATCH);
        }

        match username {
            Some(username) if errors.is_empty() => Ok(ValidRegistration {
                username,
                password: self.password1.clone(),
            }),
            _ => Err(errors),
        }
    }
}

//! User validation utilities

use std::borrow::Cow;

use thiserror::Error;
use validator::ValidationError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Username is too short. Minimum length is {0} characters")]
    UsernameTooShort(usize),

    #[error("Username contains invalid character: '{0}'. Only alphanumeric characters, underscores, and hyphens are allowed")]
    InvalidUsernameCharacter(char),

    #[error("Password is required")]
    EmptyPassword,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

impl UserValidationError {
    /// Stable code reported alongside the message in field errors
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyUsername | Self::EmptyPassword => "required",
            Self::UsernameTooLong(_) | Self::PasswordTooLong(_) => "too_long",
            Self::UsernameTooShort(_) | Self::PasswordTooShort(_) => "too_short",
            Self::InvalidUsernameCharacter(_) => "invalid_character",
        }
    }
}

impl From<UserValidationError> for ValidationError {
    fn from(err: UserValidationError) -> Self {
        let mut error = ValidationError::new(err.code());
        error.message = Some(Cow::Owned(err.to_string()));
        error
    }
}

const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Minimum 3 characters
/// - Maximum 50 characters
/// - Only alphanumeric characters, underscores, and hyphens
///
/// Lengths count characters, not bytes. A disallowed character is reported
/// ahead of any length problem.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if let Some(c) = username
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
    {
        return Err(UserValidationError::InvalidUsernameCharacter(c));
    }

    let length = username.chars().count();

    if length < MIN_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    if length > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Cannot be empty
/// - Minimum 8 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

/// `validator` adapter for [`validate_username`]
pub(crate) fn username_constraint(username: &str) -> Result<(), ValidationError> {
    validate_username(username).map_err(ValidationError::from)
}

/// `validator` adapter for [`validate_password`]
pub(crate) fn password_constraint(password: &str) -> Result<(), ValidationError> {
    validate_password(password).map_err(ValidationError::from)
}

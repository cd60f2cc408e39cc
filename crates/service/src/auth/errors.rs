use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username and password are required.")]
    Validation,
    #[error("User already exists. Please choose a different username.")]
    Conflict,
    #[error("User not found. Please check your username.")]
    NotFound,
    #[error("Incorrect password.")]
    PasswordMismatch,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation => 1001,
            AuthError::Conflict => 1002,
            AuthError::NotFound => 1003,
            AuthError::PasswordMismatch => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::Repository(_) => 1200,
        }
    }

    /// Caller mistakes as opposed to server-side failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AuthError::Validation | AuthError::Conflict | AuthError::NotFound | AuthError::PasswordMismatch)
    }
}

impl From<crate::errors::ServiceError> for AuthError {
    fn from(e: crate::errors::ServiceError) -> Self {
        AuthError::Repository(e.to_string())
    }
}

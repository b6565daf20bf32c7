//! Error types for the User actor and mock authentication.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User with this email already exists")]
    AlreadyExists(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired session token")]
    InvalidToken,

    #[error("Admin access required")]
    Forbidden,

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunication(msg)
    }
}

//! Error types for the Product actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Rejected payload or query. The message is shown to the caller as is.
    #[error("{0}")]
    Validation(String),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunication(msg)
    }
}

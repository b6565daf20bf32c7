//! Error types for the Order actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Out of stock: {0}")]
    OutOfStock(String),

    #[error("Order validation error: {0}")]
    Validation(String),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunication(msg)
    }
}

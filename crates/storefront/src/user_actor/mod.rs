//! # User Actor
//!
//! Owns shopper accounts. Authentication is a mock: credentials are compared
//! as stored and session tokens are derived from the user id. See
//! [`UserClient`](crate::clients::UserClient) for register, login and token
//! verification.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Role, User, UserCreate};
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::new(buffer_size)
}

/// The two demo accounts: an admin and a customer.
pub fn seed_users() -> Vec<UserCreate> {
    vec![
        UserCreate {
            email: "admin@elitestore.com".into(),
            password: "admin123".into(),
            first_name: "Admin".into(),
            last_name: "User".into(),
            role: Role::Admin,
        },
        UserCreate {
            email: "user@example.com".into(),
            password: "user123".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            role: Role::Customer,
        },
    ]
}

//! # Order Actor
//!
//! Owns placed orders. Its context is `(UserClient, ProductClient)`, injected
//! through `run()`; `on_create` uses them to reject orders for unknown users
//! and for products that are missing or out of stock. Stock is never
//! decremented.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}

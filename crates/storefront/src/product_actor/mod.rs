//! # Product Actor
//!
//! Owns the catalog. Besides CRUD it answers [`ProductAction`]s: a stock
//! check used by the order actor, and the two admin toggles.
//!
//! - [`entity`]: [`ActorEntity`](store_actor::ActorEntity) implementation and payload validation
//! - [`error`]: [`ProductError`]
//! - [`actions`]: [`ProductAction`] and [`ProductActionResult`]
//!
//! ```rust
//! use storefront::clients::ProductClient;
//! use storefront::model::ProductCreate;
//! use storefront::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(8);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate::new("Yoga Mat", "Non-slip mat", 25.0, "sports"))
//!         .await?;
//!     assert!(client.check_stock(id).await?);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}

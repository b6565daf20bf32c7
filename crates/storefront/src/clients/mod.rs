//! Typed clients, one per actor, plus the admin facade.
//!
//! Each wraps a [`ResourceClient`](store_actor::ResourceClient) and implements
//! [`ActorClient`] for the shared `get`/`list`/`delete`; bring the trait into
//! scope to call them.

pub mod admin_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use admin_client::AdminClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use store_actor::ActorClient;
pub use user_client::UserClient;

//! # Store Actor
//!
//! Resource-oriented actors on Tokio. Each resource type (products, shoppers,
//! orders) lives in exactly one [`ResourceActor`] task that owns its store and
//! processes requests sequentially; everything else holds a cloned
//! [`ResourceClient`] and talks to it over a channel.
//!
//! This replaces process-wide mutable arrays with stores whose lifetime is
//! explicit: the store exists from `tokio::spawn(actor.run(ctx))` until the last
//! client is dropped.
//!
//! ## Request vocabulary
//!
//! `Create`, `Get`, `List`, `Update`, `Delete` and a resource-specific
//! `Action`. See [`ResourceRequest`].
//!
//! ## Wiring dependencies
//!
//! Dependencies are injected when the actor starts, not when it is built:
//!
//! ```rust,ignore
//! let (shopper_actor, shoppers) = ResourceActor::<Shopper>::new(32);
//! let (order_actor, orders) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(shopper_actor.run(()));
//! tokio::spawn(order_actor.run(shoppers.clone()));
//! ```
//!
//! ## Errors
//!
//! Runtime failures are [`ActorError`]s. Hook failures travel boxed inside
//! [`ActorError::Entity`]; [`ActorError::into_entity`] turns them back into the
//! resource's own error type.
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts responses for a resource so an actor can be
//! tested against fake dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::ActorError;
pub use message::{ResourceRequest, Response};

//! # ActorEntity Trait
//!
//! Every resource owned by a [`ResourceActor`](crate::ResourceActor) (products,
//! shoppers, orders, ...) implements [`ActorEntity`]. The trait fixes the
//! identifier type, the create/update payloads, the custom action vocabulary,
//! the injected context and the error type, so one message loop can serve all
//! of them.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before the entity
//!   is stored. Returning an error rejects the create.
//! - [`ActorEntity::on_delete`] runs before removal. Returning an error keeps
//!   the entity.
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for a resource managed by a [`ResourceActor`](crate::ResourceActor).
///
/// # Async & Context
/// Hooks are async so they can call other actors. `Context` is handed to
/// `run()` rather than `new()`, which lets actors that depend on each other be
/// constructed in any order and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Short resource name used in log fields and `NotFound` errors.
    const KIND: &'static str;

    /// Identifier. The actor allocates sequential `u32` values starting at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` for none.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its allocated id and payload. Runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place. A failed update must leave `self` unchanged.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

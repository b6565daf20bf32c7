//! # Requests
//!
//! Messages sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor). Every variant carries a oneshot
//! responder; the actor answers each request exactly once.

use crate::entity::ActorEntity;
use crate::error::ActorError;
use tokio::sync::oneshot;

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<Result<T, ActorError>>;

/// The resource-oriented request vocabulary: CRUD, a full listing, and
/// resource-specific actions.
///
/// - **Create** allocates an id and builds the entity from [`ActorEntity::Create`].
/// - **Get** returns a snapshot, or `None`.
/// - **List** returns snapshots of every entity in insertion order.
/// - **Update** applies [`ActorEntity::Update`] and returns the new state.
/// - **Delete** removes the entity and returns what was removed.
/// - **Action** runs an [`ActorEntity::Action`] against one entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

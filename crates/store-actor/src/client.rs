//! # Resource Client
//!
//! The caller-side handle of a [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::ActorError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// Async, cloneable handle that forwards requests to a resource actor.
///
/// It holds only the channel sender, so clones are cheap. The actor stops once
/// every clone is dropped.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, ActorError>>) -> ResourceRequest<T>,
    ) -> Result<R, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, ActorError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ActorError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every entity, in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, ActorError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, ActorError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Removes the entity and returns its final state.
    pub async fn delete(&self, id: T::Id) -> Result<T, ActorError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ActorError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

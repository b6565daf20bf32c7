//! # ActorClient Trait
//!
//! Shared surface for resource-specific clients: implement `inner()` and
//! `map_error()`, and `get`, `list` and `delete` come for free.
use crate::{ActorEntity, ActorError, ResourceClient};
use async_trait::async_trait;

/// Standard reads and removal for a domain client wrapping a [`ResourceClient`].
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Translates runtime errors into the domain error type.
    fn map_error(e: ActorError) -> Self::Error;

    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

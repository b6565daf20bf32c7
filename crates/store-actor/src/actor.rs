//! # Resource Actor
//!
//! The server half of a resource: one Tokio task that exclusively owns the
//! in-memory store for an entity type and processes requests one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::ActorError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// Requests are handled sequentially inside [`run`](Self::run), so the store
/// needs no locking: nothing outside this task can reach it.
///
/// The store keeps a side list of ids in insertion order. `List` answers in
/// that order, which is what the catalog's "featured" ordering relies on.
///
/// ```rust
/// use store_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     const KIND: &'static str = "Note";
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.0 })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), NoteError> { Ok(()) }
///     async fn handle_action(&mut self, a: NoteAction, _: &()) -> Result<(), NoteError> { match a {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(8);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(NoteCreate("hello".into())).await.unwrap();
///     let all = client.list().await.unwrap();
///     assert_eq!(all[0].id, id);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its first client.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let kind = T::KIND;
        info!(kind, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(kind, ?params, "Create");
                    let result = self.create(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(kind, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(kind, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(kind, %id, ?update, "Update");
                    let result = self.update(id, update, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(kind, %id, "Delete");
                    let result = self.delete(id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(kind, %id, ?action, "Action");
                    let result = self.action(id, action, &context).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(kind, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T::Id, ActorError> {
        let kind = T::KIND;
        let id = T::Id::from(self.next_id);

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(kind, error = %e, "Create failed");
            ActorError::Entity(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(kind, error = %e, "on_create failed");
            return Err(ActorError::Entity(Box::new(e)));
        }

        // Rejected creates do not consume an id.
        self.next_id += 1;
        self.store.insert(id.clone(), item);
        self.order.push(id.clone());
        info!(kind, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, ActorError> {
        let kind = T::KIND;
        let Some(item) = self.store.get_mut(&id) else {
            warn!(kind, %id, "Not found");
            return Err(ActorError::NotFound { kind, id: id.to_string() });
        };
        if let Err(e) = item.on_update(update, context).await {
            warn!(kind, %id, error = %e, "Update failed");
            return Err(ActorError::Entity(Box::new(e)));
        }
        info!(kind, %id, "Updated");
        Ok(item.clone())
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<T, ActorError> {
        let kind = T::KIND;
        let Some(item) = self.store.get(&id) else {
            warn!(kind, %id, "Not found");
            return Err(ActorError::NotFound { kind, id: id.to_string() });
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(kind, %id, error = %e, "on_delete failed");
            return Err(ActorError::Entity(Box::new(e)));
        }
        self.order.retain(|existing| existing != &id);
        let removed = self
            .store
            .remove(&id)
            .ok_or_else(|| ActorError::NotFound { kind, id: id.to_string() })?;
        info!(kind, %id, size = self.store.len(), "Deleted");
        Ok(removed)
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, ActorError> {
        let kind = T::KIND;
        let Some(item) = self.store.get_mut(&id) else {
            warn!(kind, %id, "Not found");
            return Err(ActorError::NotFound { kind, id: id.to_string() });
        };
        let result = item
            .handle_action(action, context)
            .await
            .map_err(|e| ActorError::Entity(Box::new(e)));
        match &result {
            Ok(_) => info!(kind, %id, "Action ok"),
            Err(e) => warn!(kind, %id, error = %e, "Action failed"),
        }
        result
    }
}

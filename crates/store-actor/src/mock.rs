//! # Mock Clients
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a running actor.
//! It is the tool for testing an actor whose *dependencies* should not run,
//! e.g. an order actor whose product and shopper lookups are scripted.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, scripted responses | real store |
//! | Determinism | full | scheduler dependent |
//! | Error injection | `return_err` | needs a crafted state |
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation's kind panics the mock task, which surfaces in the caller as
//! [`ActorError::Dropped`], and [`MockClient::verify`] panics if any
//! expectation is left unconsumed.
//!
//! ```rust
//! use store_actor::mock::MockClient;
//! use store_actor::{ActorEntity, ActorError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug)] struct TagUpdate;
//! #[derive(Debug)] enum TagAction {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     const KIND: &'static str = "Tag";
//!     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
//!     type Action = TagAction; type ActionResult = (); type Context = (); type Error = TagError;
//!     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), TagError> { Ok(()) }
//!     async fn handle_action(&mut self, a: TagAction, _: &()) -> Result<(), TagError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Some(Tag { id: 1 }));
//!     mock.expect_list().return_err(ActorError::Closed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().id, 1);
//!     assert!(matches!(client.list().await, Err(ActorError::Closed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::ActorError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted response, keyed by the request kind it answers.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, ActorError>,
    },
    Create {
        response: Result<T::Id, ActorError>,
    },
    List {
        response: Result<Vec<T>, ActorError>,
    },
    Update {
        id: T::Id,
        response: Result<T, ActorError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, ActorError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, ActorError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client backed by scripted expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_id<I: PartialEq + std::fmt::Debug>(kind: &str, expected: &I, actual: &I) {
    if expected != actual {
        panic!("{kind}: expected request for {expected:?}, got {actual:?}");
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        check_id(T::KIND, &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        check_id(T::KIND, &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        check_id(T::KIND, &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        check_id(T::KIND, &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("{}: unexpected {} request", T::KIND, request_name(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectation<T> {
        GetExpectation { id, queue: self.expectations.clone() }
    }

    pub fn expect_create(&mut self) -> CreateExpectation<T> {
        CreateExpectation { queue: self.expectations.clone() }
    }

    pub fn expect_list(&mut self) -> ListExpectation<T> {
        ListExpectation { queue: self.expectations.clone() }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectation<T> {
        UpdateExpectation { id, queue: self.expectations.clone() }
    }

    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectation<T> {
        DeleteExpectation { id, queue: self.expectations.clone() }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectation<T> {
        ActionExpectation { id, queue: self.expectations.clone() }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining > 0 {
            panic!("{}: {} expectation(s) were not met", T::KIND, remaining);
        }
    }
}

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(expectation);
}

/// Builder for `get` expectations.
pub struct GetExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Queue<T>,
}

impl<T: ActorEntity> GetExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(&self.queue, Expectation::Get { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: ActorError) {
        push(&self.queue, Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<T: ActorEntity> {
    queue: Queue<T>,
}

impl<T: ActorEntity> CreateExpectation<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.queue, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: ActorError) {
        push(&self.queue, Expectation::Create { response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectation<T: ActorEntity> {
    queue: Queue<T>,
}

impl<T: ActorEntity> ListExpectation<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push(&self.queue, Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: ActorError) {
        push(&self.queue, Expectation::List { response: Err(error) });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Queue<T>,
}

impl<T: ActorEntity> UpdateExpectation<T> {
    pub fn return_ok(self, item: T) {
        push(&self.queue, Expectation::Update { id: self.id, response: Ok(item) });
    }

    pub fn return_err(self, error: ActorError) {
        push(&self.queue, Expectation::Update { id: self.id, response: Err(error) });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Queue<T>,
}

impl<T: ActorEntity> DeleteExpectation<T> {
    pub fn return_ok(self, removed: T) {
        push(&self.queue, Expectation::Delete { id: self.id, response: Ok(removed) });
    }

    pub fn return_err(self, error: ActorError) {
        push(&self.queue, Expectation::Delete { id: self.id, response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Queue<T>,
}

impl<T: ActorEntity> ActionExpectation<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(&self.queue, Expectation::Action { id: self.id, response: Ok(result) });
    }

    pub fn return_err(self, error: ActorError) {
        push(&self.queue, Expectation::Action { id: self.id, response: Err(error) });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// A client plus the raw receiver, for tests that want to inspect each request
/// and answer it by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, ActorError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, ActorError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, ActorError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, ActorError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

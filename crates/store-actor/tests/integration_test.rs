use async_trait::async_trait;
use store_actor::{ActorEntity, ActorError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    label: String,
    locked: bool,
}

#[derive(Debug)]
struct ShelfCreate {
    label: String,
}

#[derive(Debug)]
struct ShelfUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum ShelfAction {
    Lock,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum ShelfError {
    #[error("label must not be blank")]
    BlankLabel,
    #[error("shelf is locked")]
    Locked,
}

#[async_trait]
impl ActorEntity for Shelf {
    const KIND: &'static str = "Shelf";
    type Id = u32;
    type Create = ShelfCreate;
    type Update = ShelfUpdate;
    type Action = ShelfAction;
    type ActionResult = bool;
    type Context = ();
    type Error = ShelfError;

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        if params.label.trim().is_empty() {
            return Err(ShelfError::BlankLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            locked: false,
        })
    }

    async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if self.locked {
            return Err(ShelfError::Locked);
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.locked {
            return Err(ShelfError::Locked);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            ShelfAction::Lock => {
                let changed = !self.locked;
                self.locked = true;
                Ok(changed)
            }
        }
    }
}

fn create(label: &str) -> ShelfCreate {
    ShelfCreate { label: label.to_string() }
}

// --- Tests ---

#[tokio::test]
async fn test_full_lifecycle() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(create("Audio")).await.unwrap();
    assert_eq!(id, 1);

    let updated = client
        .update(id, ShelfUpdate { label: Some("Hi-Fi".into()) })
        .await
        .unwrap();
    assert_eq!(updated.label, "Hi-Fi");

    let removed = client.delete(id).await.unwrap();
    assert_eq!(removed.label, "Hi-Fi");
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order_across_deletes() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["Books", "Garden", "Sports", "Beauty"] {
        client.create(create(label)).await.unwrap();
    }
    client.delete(2).await.unwrap();
    client.create(create("Fashion")).await.unwrap();

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|shelf| shelf.label)
        .collect();
    assert_eq!(labels, vec!["Books", "Sports", "Beauty", "Fashion"]);
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_an_id() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(create("   ")).await.unwrap_err();
    assert_eq!(err.into_entity::<ShelfError>().unwrap(), ShelfError::BlankLabel);

    assert_eq!(client.create(create("Toys")).await.unwrap(), 1);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_hook_failures_leave_the_store_untouched() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Audio")).await.unwrap();
    assert!(client.perform_action(id, ShelfAction::Lock).await.unwrap());
    assert!(!client.perform_action(id, ShelfAction::Lock).await.unwrap());

    let err = client
        .update(id, ShelfUpdate { label: Some("Video".into()) })
        .await
        .unwrap_err();
    assert_eq!(err.into_entity::<ShelfError>().unwrap(), ShelfError::Locked);

    let err = client.delete(id).await.unwrap_err();
    assert_eq!(err.into_entity::<ShelfError>().unwrap(), ShelfError::Locked);

    let shelf = client.get(id).await.unwrap().unwrap();
    assert_eq!(shelf.label, "Audio");
    assert!(shelf.locked);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(
        client.update(42, ShelfUpdate { label: None }).await,
        Err(ActorError::NotFound { kind: "Shelf", .. })
    ));
    assert!(matches!(client.delete(42).await, Err(ActorError::NotFound { .. })));
    assert!(matches!(
        client.perform_action(42, ShelfAction::Lock).await,
        Err(ActorError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    drop(actor);

    assert!(matches!(client.list().await, Err(ActorError::Closed)));
}

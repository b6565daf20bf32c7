use crate::catalog::seed::seed_product_params;
use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::config::Config;
use crate::order_actor;
use crate::product_actor::{self, ProductError};
use crate::user_actor::{self, seed_users, UserError};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to seed catalog: {0}")]
    SeedCatalog(#[from] ProductError),

    #[error("failed to seed users: {0}")]
    SeedUsers(#[from] UserError),

    #[error("{0} actor task failed: {1}")]
    ActorTask(&'static str, String),
}

/// The running store: one actor per resource, plus the clients to reach them.
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub order_client: OrderClient,
    config: Config,
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl StoreSystem {
    /// Spawns the actors, wires the order actor to the other two and seeds
    /// the mock data the config asks for.
    #[instrument(skip_all)]
    pub async fn start(config: &Config) -> Result<Self, SystemError> {
        let (product_actor, product_resource) = product_actor::new(config.channel_buffer);
        let (user_actor, user_resource) = user_actor::new(config.channel_buffer);
        let (order_actor, order_resource) = order_actor::new(config.channel_buffer);

        let product_client = ProductClient::new(product_resource);
        let user_client = UserClient::new(user_resource);
        let order_client = OrderClient::new(order_resource);

        let handles = vec![
            ("Product", tokio::spawn(product_actor.run(()))),
            ("User", tokio::spawn(user_actor.run(()))),
            (
                "Order",
                tokio::spawn(order_actor.run((user_client.clone(), product_client.clone()))),
            ),
        ];

        let system = Self {
            product_client,
            user_client,
            order_client,
            config: config.clone(),
            handles,
        };

        if config.seed_catalog {
            for params in seed_product_params() {
                system.product_client.create_product(params).await?;
            }
        }
        if config.seed_users {
            for params in seed_users() {
                system.user_client.create_user(params).await?;
            }
        }

        info!(
            seed_catalog = config.seed_catalog,
            seed_users = config.seed_users,
            "Store started"
        );
        Ok(system)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops this system's clients and waits for every actor to stop.
    ///
    /// Actors stop once all clones of their client are gone, so callers must
    /// drop any clones they took before awaiting this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down store");
        drop(self.order_client);
        drop(self.product_client);
        drop(self.user_client);

        let mut failure = None;
        for (name, handle) in self.handles {
            if let Err(e) = handle.await {
                error!(actor = name, error = %e, "Actor task failed");
                failure.get_or_insert(SystemError::ActorTask(name, e.to_string()));
            }
        }
        match failure {
            Some(e) => Err(e),
            None => {
                info!("Store stopped");
                Ok(())
            }
        }
    }
}

use crate::api::{BurgerApi, TokenStorage};
use crate::clients::{
    ConstructorClient, FeedClient, IngredientsClient, OrderClient, UserClient, UserOrdersClient,
};
use crate::config::StoreConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// The running application state: six store actors and their clients.
///
/// Created once at startup with [`BurgerSystem::start`] and torn down with
/// [`BurgerSystem::shutdown`]. There is no global instance; pass the system
/// (or clones of its clients) to whatever needs it.
pub struct BurgerSystem {
    pub constructor: ConstructorClient,
    pub ingredients: IngredientsClient,
    pub order: OrderClient,
    pub user: UserClient,
    pub user_orders: UserOrdersClient,
    pub feed: FeedClient,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BurgerSystem {
    /// Creates every store and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(
        config: StoreConfig,
        api: Arc<dyn BurgerApi>,
        tokens: Arc<dyn TokenStorage>,
    ) -> Self {
        info!(buffer_size = config.buffer_size, "Starting stores");

        let (constructor_actor, constructor) = crate::constructor_store::new(&config);
        let (ingredients_actor, ingredients) =
            crate::ingredients_store::new(&config, api.clone());
        let (order_actor, order) = crate::order_store::new(
            &config,
            api.clone(),
            tokens.clone(),
            constructor.clone(),
        );
        let (user_actor, user) = crate::user_store::new(&config, api.clone(), tokens.clone());
        let (user_orders_actor, user_orders) =
            crate::user_orders_store::new(&config, api.clone(), tokens);
        let (feed_actor, feed) = crate::feed_store::new(&config, api);

        let handles = vec![
            tokio::spawn(constructor_actor.run()),
            tokio::spawn(ingredients_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(user_actor.run()),
            tokio::spawn(user_orders_actor.run()),
            tokio::spawn(feed_actor.run()),
        ];

        Self {
            constructor,
            ingredients,
            order,
            user,
            user_orders,
            feed,
            handles,
        }
    }

    /// Gracefully shuts down every store.
    ///
    /// Clients cloned out of the system keep their store alive, so drop them
    /// first or this waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down stores...");

        // Dropping the senders makes each actor's `recv` return `None`.
        drop(self.constructor);
        drop(self.ingredients);
        drop(self.order);
        drop(self.user);
        drop(self.user_orders);
        drop(self.feed);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(SystemError::TaskFailed(format!("{e:?}")));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

//! # Ingredient Catalog Store
//!
//! The list of ingredients fetched from the server, with the usual loading
//! flag and last error.

pub mod actions;
pub mod error;
pub mod slice;

pub use actions::*;
pub use error::*;
pub use slice::*;

use crate::api::BurgerApi;
use crate::clients::IngredientsClient;
use crate::config::StoreConfig;
use crate::framework::StoreActor;
use std::sync::Arc;

/// Creates a new catalog store and a client that loads it from `api`.
pub fn new(
    config: &StoreConfig,
    api: Arc<dyn BurgerApi>,
) -> (StoreActor<IngredientsState>, IngredientsClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size);
    (actor, IngredientsClient::new(generic_client, api))
}

//! # User Order History Store
//!
//! Orders placed by the signed-in user, fetched with their access token.

pub mod actions;
pub mod error;
pub mod slice;

pub use actions::*;
pub use error::*;
pub use slice::*;

use crate::api::{BurgerApi, TokenStorage};
use crate::clients::UserOrdersClient;
use crate::config::StoreConfig;
use crate::framework::StoreActor;
use std::sync::Arc;

/// Creates a new history store and its client.
pub fn new(
    config: &StoreConfig,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStorage>,
) -> (StoreActor<UserOrdersState>, UserOrdersClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size);
    (actor, UserOrdersClient::new(generic_client, api, tokens))
}

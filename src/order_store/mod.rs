//! # Order Submission Store
//!
//! Tracks the order being submitted, or looked up by number, and the outcome.
//! Submission is guarded by the constructor contents, see
//! [`OrderClient::create_order`](crate::clients::OrderClient::create_order).

pub mod actions;
pub mod error;
pub mod slice;

pub use actions::*;
pub use error::*;
pub use slice::*;

use crate::api::{BurgerApi, TokenStorage};
use crate::clients::{ConstructorClient, OrderClient};
use crate::config::StoreConfig;
use crate::framework::StoreActor;
use std::sync::Arc;

/// Creates a new order store and its client.
///
/// The client reads the constructor through `constructor` before submitting.
pub fn new(
    config: &StoreConfig,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStorage>,
    constructor: ConstructorClient,
) -> (StoreActor<OrderState>, OrderClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size);
    (
        actor,
        OrderClient::new(generic_client, api, tokens, constructor),
    )
}

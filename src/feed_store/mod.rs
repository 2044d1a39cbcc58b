//! # Feed Store
//!
//! The public live feed: recent orders from everyone plus the all-time and
//! today's totals.

pub mod actions;
pub mod error;
pub mod slice;

pub use actions::*;
pub use error::*;
pub use slice::*;

use crate::api::BurgerApi;
use crate::clients::FeedClient;
use crate::config::StoreConfig;
use crate::framework::StoreActor;
use std::sync::Arc;

/// Creates a new feed store and its client.
pub fn new(config: &StoreConfig, api: Arc<dyn BurgerApi>) -> (StoreActor<FeedState>, FeedClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size);
    (actor, FeedClient::new(generic_client, api))
}

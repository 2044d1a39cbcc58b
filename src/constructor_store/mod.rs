//! # Order Constructor Store
//!
//! Holds the burger currently being assembled: one bun slot and an ordered
//! list of fillings and sauces. Every transition is synchronous and cannot
//! fail; out-of-range moves and unknown deletions are silently ignored.
//!
//! - [`actions`] - [`ConstructorAction`]
//! - [`slice`] - [`ConstructorState`] and its reducer
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod slice;

pub use actions::*;
pub use slice::*;

use crate::clients::ConstructorClient;
use crate::config::StoreConfig;
use crate::framework::StoreActor;

/// Creates a new constructor store and its client.
pub fn new(config: &StoreConfig) -> (StoreActor<ConstructorState>, ConstructorClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size);
    (actor, ConstructorClient::new(generic_client))
}

//! # User Session Store
//!
//! Sign-in state: the current user, whether the startup check has run, and
//! the outcome of the last auth request. Tokens never enter the store; the
//! [`UserClient`] keeps them in [`TokenStorage`].

pub mod actions;
pub mod error;
pub mod slice;

pub use actions::*;
pub use error::*;
pub use slice::*;

use crate::api::{BurgerApi, TokenStorage};
use crate::clients::UserClient;
use crate::config::StoreConfig;
use crate::framework::StoreActor;
use std::sync::Arc;

/// Creates a new session store and its client.
pub fn new(
    config: &StoreConfig,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStorage>,
) -> (StoreActor<UserState>, UserClient) {
    let (actor, generic_client) = StoreActor::new(config.buffer_size);
    (actor, UserClient::new(generic_client, api, tokens))
}

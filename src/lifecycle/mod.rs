//! # System Lifecycle
//!
//! Starting, wiring and stopping the six store actors.
//!
//! Individual stores are simple; wiring them together is where the
//! complexity lives. [`BurgerSystem::start`] creates every actor, hands each
//! client the collaborators it needs, and spawns the actors. The
//! [`OrderClient`](crate::clients::OrderClient) is the only client that
//! depends on another store: it gets a clone of the constructor client so it
//! can read the burger before submitting it.
//!
//! ```rust,ignore
//! let system = BurgerSystem::start(StoreConfig::from_env(), api, tokens);
//! system.ingredients.fetch().await?;
//! // ...
//! system.shutdown().await?;
//! ```
//!
//! Shutdown drops every client, which closes the channels; each actor then
//! leaves its loop, logs its final state and returns.

pub mod burger_system;
pub mod tracing;

pub use burger_system::*;
pub use self::tracing::setup_tracing;

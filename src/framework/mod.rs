//! Generic store framework.
//!
//! # Main Components
//!
//! - [`Slice`] - Trait that every piece of application state implements
//! - [`StoreActor`] - Generic actor that owns one slice
//! - [`StoreClient`] - Typed handle for dispatching actions and reading state
//! - [`AsyncPhase`] / [`Rejection`] - The three-phase request lifecycle
//!
//! # Testing
//!
//! See [`mock`] for a recording store that lets you test clients without real actors.

pub mod core;
pub mod mock;
pub mod phase;

pub use core::*;
pub use phase::{AsyncPhase, Rejection};

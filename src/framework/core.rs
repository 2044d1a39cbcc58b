//! # Core Store Framework
//!
//! This module defines the generic building blocks for the store system.
//!
//! ## Key Types
//!
//! - [`Slice`]: The trait that every piece of application state implements.
//! - [`StoreActor`]: The generic actor that owns one slice and reduces actions into it.
//! - [`StoreClient`]: The generic client for dispatching actions to an actor.
//! - [`StoreError`]: Communication errors (actor closed, response dropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any piece of state must implement to be managed by a [`StoreActor`].
///
/// # Architecture Note
/// Every store in the application (constructor, catalog, session, ...) is a
/// plain value plus a reducer. By describing that contract once we write the
/// message loop *once* and reuse it for all six stores.
///
/// The reducer is synchronous and has no side effects. Anything that talks to
/// the network lives in the clients, which only ever hand finished results to
/// the store as actions.
pub trait Slice: Clone + Default + Debug + Send + Sync + 'static {
    /// Every transition this slice understands.
    type Action: Clone + Debug + Send + Sync + 'static;

    /// Apply one action to the state.
    fn reduce(&mut self, action: Self::Action);
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Message sent to a [`StoreActor`].
///
/// - **Dispatch**: reduce an action and answer with the resulting state.
/// - **Snapshot**: answer with the current state without changing it.
#[derive(Debug)]
pub enum StoreRequest<S: Slice> {
    Dispatch {
        action: S::Action,
        respond_to: Response<S>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single slice.
///
/// **Concurrency Model**:
/// Each store runs in its own task and handles messages one at a time, so the
/// state needs no `Mutex`. All writes to a slice are serialized through its
/// channel.
pub struct StoreActor<S: Slice> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
}

impl<S: Slice> StoreActor<S> {
    /// Creates a store holding `S::default()` and the client that talks to it.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        Self::with_state(buffer_size, S::default())
    }

    /// Creates a store seeded with `state`.
    pub fn with_state(buffer_size: usize, state: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "ConstructorState" instead of "burger_store::constructor_store::slice::ConstructorState"
        let slice = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(slice, "Store started");

        let mut reduced = 0u64;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(slice, ?action, "Dispatch");
                    self.state.reduce(action);
                    reduced += 1;
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(slice, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(slice, reduced, "Shutdown");
        debug!(slice, state = ?self.state, "Final state");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle for dispatching to a [`StoreActor`]. Cheap to clone.
#[derive(Clone)]
pub struct StoreClient<S: Slice> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: Slice> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    /// Reduces `action` in the store and returns the state it produced.
    pub async fn dispatch(&self, action: S::Action) -> Result<S, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Returns a copy of the current state.
    pub async fn state(&self) -> Result<S, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

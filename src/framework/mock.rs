//! # Mock Store & Testing Guide
//!
//! `MockStore<S>` answers the same requests as a real [`StoreActor`](super::StoreActor)
//! but records every dispatched action so tests can assert on *what the
//! client sent*, not only on the resulting state.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **Dispatch log** | Every action recorded | Not observable |
//! | **Error Injection** | `expect_dispatch().return_err(..)` | Only by dropping the actor |
//! | **Canned state** | `expect_snapshot().return_ok(..)` | Must dispatch to get there |
//! | **Use Case** | Testing client orchestration | Testing reducers and the full system |
//!
//! Without an expectation the mock behaves like a real store: it reduces the
//! action into its own state and answers with the result.
//!
//! ```rust
//! use burger_store::framework::mock::MockStore;
//! use burger_store::constructor_store::{ConstructorAction, ConstructorState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<ConstructorState>::new();
//!     mock.expect_snapshot().return_ok(ConstructorState::default());
//!
//!     let client = mock.client();
//!     let state = client.state().await.unwrap();
//!     assert!(state.bun.is_none());
//!
//!     client.dispatch(ConstructorAction::Clear).await.unwrap();
//!     assert_eq!(mock.dispatched().len(), 1);
//!     mock.verify();
//! }
//! ```

use super::core::{Slice, StoreClient, StoreError, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A queued canned answer.
enum Expectation<S: Slice> {
    Snapshot { response: Result<S, StoreError> },
    Dispatch { response: Result<S, StoreError> },
}

struct Shared<S: Slice> {
    state: S,
    expectations: VecDeque<Expectation<S>>,
    dispatched: Vec<S::Action>,
}

/// A recording store with optional canned answers.
pub struct MockStore<S: Slice> {
    client: StoreClient<S>,
    shared: Arc<Mutex<Shared<S>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Slice> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slice> MockStore<S> {
    /// Creates a mock holding `S::default()`.
    pub fn new() -> Self {
        Self::with_state(S::default())
    }

    /// Creates a mock holding `state`.
    pub fn with_state(state: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let shared = Arc::new(Mutex::new(Shared {
            state,
            expectations: VecDeque::new(),
            dispatched: Vec::new(),
        }));
        let shared_clone = shared.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut shared = shared_clone.lock().expect("mock store poisoned");
                match request {
                    StoreRequest::Dispatch { action, respond_to } => {
                        shared.dispatched.push(action.clone());
                        let response = match shared.expectations.pop_front() {
                            Some(Expectation::Dispatch { response }) => response,
                            other => {
                                if let Some(expectation) = other {
                                    shared.expectations.push_front(expectation);
                                }
                                shared.state.reduce(action);
                                Ok(shared.state.clone())
                            }
                        };
                        let _ = respond_to.send(response);
                    }
                    StoreRequest::Snapshot { respond_to } => {
                        let response = match shared.expectations.pop_front() {
                            Some(Expectation::Snapshot { response }) => response,
                            other => {
                                if let Some(expectation) = other {
                                    shared.expectations.push_front(expectation);
                                }
                                Ok(shared.state.clone())
                            }
                        };
                        let _ = respond_to.send(response);
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            shared,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Queues an answer for the next snapshot request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: Kind::Snapshot,
            shared: self.shared.clone(),
        }
    }

    /// Queues an answer for the next dispatch. The action is still recorded
    /// but not reduced.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: Kind::Dispatch,
            shared: self.shared.clone(),
        }
    }

    /// Every action dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<S::Action> {
        self.shared
            .lock()
            .expect("mock store poisoned")
            .dispatched
            .clone()
    }

    /// The mock's own state after all reduced actions.
    pub fn state(&self) -> S {
        self.shared.lock().expect("mock store poisoned").state.clone()
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let shared = self.shared.lock().expect("mock store poisoned");
        if !shared.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                shared.expectations.len()
            );
        }
    }
}

enum Kind {
    Snapshot,
    Dispatch,
}

/// Builder returned by [`MockStore::expect_snapshot`] and [`MockStore::expect_dispatch`].
pub struct ExpectationBuilder<S: Slice> {
    kind: Kind,
    shared: Arc<Mutex<Shared<S>>>,
}

impl<S: Slice> ExpectationBuilder<S> {
    /// Answer with `state`.
    pub fn return_ok(self, state: S) {
        self.push(Ok(state));
    }

    /// Answer with `error`.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S, StoreError>) {
        let expectation = match self.kind {
            Kind::Snapshot => Expectation::Snapshot { response },
            Kind::Dispatch => Expectation::Dispatch { response },
        };
        self.shared
            .lock()
            .expect("mock store poisoned")
            .expectations
            .push_back(expectation);
    }
}

/// Creates a client and the raw receiver behind it, for tests that want to
/// answer each request by hand.
pub fn create_mock_client<S: Slice>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to take the next request if it is a dispatch.
pub async fn expect_dispatch<S: Slice>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, tokio::sync::oneshot::Sender<Result<S, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Flags {
        on: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum FlagAction {
        Set(bool),
    }

    impl Slice for Flags {
        type Action = FlagAction;
        fn reduce(&mut self, action: FlagAction) {
            match action {
                FlagAction::Set(on) => self.on = on,
            }
        }
    }

    #[tokio::test]
    async fn test_mock_reduces_and_records_without_expectations() {
        let mock = MockStore::<Flags>::new();
        let client = mock.client();

        let state = client.dispatch(FlagAction::Set(true)).await.unwrap();
        assert!(state.on);
        assert_eq!(mock.dispatched(), vec![FlagAction::Set(true)]);
        assert!(mock.state().on);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_uses_queued_answers_first() {
        let mut mock = MockStore::<Flags>::new();
        mock.expect_snapshot().return_ok(Flags { on: true });
        mock.expect_dispatch().return_err(StoreError::ActorDropped);
        let client = mock.client();

        assert!(client.state().await.unwrap().on);
        let result = client.dispatch(FlagAction::Set(true)).await;
        assert_eq!(result, Err(StoreError::ActorDropped));

        // Recorded but not reduced.
        assert_eq!(mock.dispatched().len(), 1);
        assert!(!mock.state().on);
        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Flags>(4);
        let task = tokio::spawn(async move { client.dispatch(FlagAction::Set(true)).await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(action, FlagAction::Set(true));
        responder.send(Ok(Flags { on: true })).unwrap();

        assert!(task.await.unwrap().unwrap().on);
    }
}

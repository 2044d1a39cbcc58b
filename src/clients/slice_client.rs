use crate::framework::{AsyncPhase, Rejection, Slice, StoreClient, StoreError};
use async_trait::async_trait;
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, warn};

/// Trait for store-specific clients to inherit the plain store operations.
///
/// Implementors only say where their [`StoreClient`] is and how framework
/// errors map into their own error type.
#[async_trait]
pub trait SliceClient<S: Slice>: Send + Sync {
    /// The store-specific error type.
    type Error: From<StoreError> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }

    /// Current snapshot of the store.
    #[tracing::instrument(skip(self))]
    async fn state(&self) -> Result<S, Self::Error> {
        debug!("Sending request");
        self.inner().state().await.map_err(Self::map_error)
    }

    /// Dispatch a single action and return the state it produced.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, action: S::Action) -> Result<S, Self::Error> {
        debug!("Sending request");
        self.inner().dispatch(action).await.map_err(Self::map_error)
    }
}

/// Runs `request` between a `Pending` and a `Fulfilled`/`Rejected` dispatch.
///
/// The rejection carries the error's `Display` text as its message, so the
/// store falls back to its own default only when that text is empty. The
/// error is returned to the caller after the store has recorded it.
pub(crate) async fn track<S, P, E, Fut>(
    store: &StoreClient<S>,
    wrap: fn(AsyncPhase<P>) -> S::Action,
    request: Fut,
) -> Result<P, E>
where
    S: Slice,
    P: Clone,
    E: From<StoreError> + Display,
    Fut: Future<Output = Result<P, E>>,
{
    track_with(store, wrap, request, message_of::<E>).await
}

/// Like [`track`], but `reject` decides what the store records.
pub(crate) async fn track_with<S, P, E, Fut>(
    store: &StoreClient<S>,
    wrap: fn(AsyncPhase<P>) -> S::Action,
    request: Fut,
    reject: fn(&E) -> Rejection,
) -> Result<P, E>
where
    S: Slice,
    P: Clone,
    E: From<StoreError> + Display,
    Fut: Future<Output = Result<P, E>>,
{
    store.dispatch(wrap(AsyncPhase::Pending)).await?;
    match request.await {
        Ok(payload) => {
            store
                .dispatch(wrap(AsyncPhase::Fulfilled(payload.clone())))
                .await?;
            Ok(payload)
        }
        Err(e) => {
            warn!(error = %e, "Request rejected");
            store.dispatch(wrap(AsyncPhase::Rejected(reject(&e)))).await?;
            Err(e)
        }
    }
}

fn message_of<E: Display>(e: &E) -> Rejection {
    match e.to_string() {
        text if text.is_empty() => Rejection::empty(),
        text => Rejection::with_message(text),
    }
}

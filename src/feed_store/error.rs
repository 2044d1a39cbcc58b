use crate::api::ApiError;
use crate::framework::StoreError;
use thiserror::Error;

/// Errors returned by the feed client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeedError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Store communication error: {0}")]
    Store(#[from] StoreError),
}

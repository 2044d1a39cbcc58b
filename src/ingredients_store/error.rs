//! Error types for the catalog client.

use crate::api::ApiError;
use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngredientsError {
    /// The catalog request failed. The store has recorded the rejection.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Store communication error: {0}")]
    Store(#[from] StoreError),
}

//! Error types for the session client.

use crate::api::ApiError;
use crate::framework::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No access token is stored, so there is no session to check.
    #[error("Нет токена доступа")]
    NoSession,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Store communication error: {0}")]
    Store(#[from] StoreError),
}

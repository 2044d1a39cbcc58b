//! Error types for order submission.

use crate::api::ApiError;
use crate::framework::StoreError;
use thiserror::Error;

/// Errors returned by [`OrderClient`](crate::clients::OrderClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The constructor has no bun. Nothing was dispatched or sent.
    #[error("Выберите булку для заказа")]
    MissingBun,

    /// The constructor has a bun but no fillings. Nothing was dispatched or sent.
    #[error("Добавьте начинку для заказа")]
    MissingFilling,

    /// Lookup by number found nothing.
    #[error("Заказ не найден")]
    NotFound,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Store communication error: {0}")]
    Store(#[from] StoreError),
}

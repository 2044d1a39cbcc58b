//! Transitions of the order submission store.

use crate::framework::AsyncPhase;
use crate::model::{NewOrderResponse, Order};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Phases of submitting the assembled burger.
    Create(AsyncPhase<NewOrderResponse>),
    /// Phases of looking an order up by its public number.
    GetByNumber(AsyncPhase<Order>),
    /// Forget the current order, its number and the last error.
    ///
    /// The loading flag is not touched.
    Clear,
}

use crate::framework::AsyncPhase;
use crate::model::Order;

#[derive(Debug, Clone, PartialEq)]
pub enum UserOrdersAction {
    /// Phases of the history request.
    Fetch(AsyncPhase<Vec<Order>>),
    ClearError,
    /// Empties the history and the error. Leaves the loading flag alone.
    Clear,
}

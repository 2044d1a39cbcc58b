use super::actions::UserOrdersAction;
use crate::framework::{AsyncPhase, Slice};
use crate::model::Order;

pub const DEFAULT_HISTORY_ERROR: &str = "Ошибка загрузки";

/// The signed-in user's past orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserOrdersState {
    pub orders: Vec<Order>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Slice for UserOrdersState {
    type Action = UserOrdersAction;

    fn reduce(&mut self, action: UserOrdersAction) {
        match action {
            UserOrdersAction::Fetch(AsyncPhase::Pending) => {
                self.is_loading = true;
                self.error = None;
            }
            UserOrdersAction::Fetch(AsyncPhase::Fulfilled(orders)) => {
                self.orders = orders;
                self.is_loading = false;
            }
            UserOrdersAction::Fetch(AsyncPhase::Rejected(rejection)) => {
                self.is_loading = false;
                self.error = Some(rejection.reason_or(DEFAULT_HISTORY_ERROR));
            }
            UserOrdersAction::ClearError => self.error = None,
            UserOrdersAction::Clear => {
                self.orders.clear();
                self.error = None;
            }
        }
    }
}

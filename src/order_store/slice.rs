use super::actions::OrderAction;
use crate::framework::{AsyncPhase, Slice};
use crate::model::Order;

pub const DEFAULT_CREATE_ERROR: &str = "Ошибка оформления заказа";
pub const DEFAULT_LOOKUP_ERROR: &str = "Ошибка загрузки";

/// The order just placed or looked up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderState {
    pub current_order: Option<Order>,
    pub order_number: Option<u64>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Slice for OrderState {
    type Action = OrderAction;

    fn reduce(&mut self, action: OrderAction) {
        match action {
            OrderAction::Create(AsyncPhase::Pending)
            | OrderAction::GetByNumber(AsyncPhase::Pending) => {
                self.is_loading = true;
                self.error = None;
            }
            OrderAction::Create(AsyncPhase::Fulfilled(response)) => {
                self.order_number = Some(response.order.number);
                self.current_order = Some(response.order);
                self.is_loading = false;
                self.error = None;
            }
            OrderAction::Create(AsyncPhase::Rejected(rejection)) => {
                self.is_loading = false;
                self.error = Some(rejection.reason_or(DEFAULT_CREATE_ERROR));
            }
            OrderAction::GetByNumber(AsyncPhase::Fulfilled(order)) => {
                self.current_order = Some(order);
                self.is_loading = false;
                self.error = None;
            }
            OrderAction::GetByNumber(AsyncPhase::Rejected(rejection)) => {
                self.is_loading = false;
                self.error = Some(rejection.reason_or(DEFAULT_LOOKUP_ERROR));
            }
            OrderAction::Clear => {
                self.current_order = None;
                self.order_number = None;
                self.error = None;
            }
        }
    }
}

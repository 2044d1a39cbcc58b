use super::actions::FeedAction;
use crate::framework::{AsyncPhase, Slice};
use crate::model::Order;

pub const DEFAULT_FEED_ERROR: &str = "Ошибка загрузки ленты";

/// The public order feed with its counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Slice for FeedState {
    type Action = FeedAction;

    fn reduce(&mut self, action: FeedAction) {
        match action {
            FeedAction::Fetch(AsyncPhase::Pending) => {
                self.is_loading = true;
                self.error = None;
            }
            // `success` is not consulted; whatever arrived is shown.
            FeedAction::Fetch(AsyncPhase::Fulfilled(feed)) => {
                self.orders = feed.orders;
                self.total = feed.total;
                self.total_today = feed.total_today;
                self.is_loading = false;
            }
            FeedAction::Fetch(AsyncPhase::Rejected(rejection)) => {
                self.is_loading = false;
                self.error = Some(rejection.reason_or(DEFAULT_FEED_ERROR));
            }
            FeedAction::ClearError => *self = Self::default(),
        }
    }
}

impl FeedState {
    /// Order numbers with the given status, newest first as received.
    pub fn numbers_with_status(&self, status: &str) -> Vec<u64> {
        self.orders
            .iter()
            .filter(|o| o.status == status)
            .map(|o| o.number)
            .collect()
    }
}

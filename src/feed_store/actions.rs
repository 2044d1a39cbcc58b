use crate::framework::AsyncPhase;
use crate::model::FeedsResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// Phases of the public feed request.
    Fetch(AsyncPhase<FeedsResponse>),
    /// Resets the whole feed, not only the error.
    ClearError,
}

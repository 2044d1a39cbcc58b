use crate::api::BurgerApi;
use crate::clients::slice_client::{track, SliceClient};
use crate::feed_store::{FeedAction, FeedError, FeedState};
use crate::framework::StoreClient;
use crate::model::FeedsResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// Client for the public order feed.
#[derive(Clone)]
pub struct FeedClient {
    inner: StoreClient<FeedState>,
    api: Arc<dyn BurgerApi>,
}

impl FeedClient {
    pub fn new(inner: StoreClient<FeedState>, api: Arc<dyn BurgerApi>) -> Self {
        Self { inner, api }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<FeedsResponse, FeedError> {
        let feed = track(&self.inner, FeedAction::Fetch, async {
            Ok::<_, FeedError>(self.api.get_feeds().await?)
        })
        .await?;
        info!(total = feed.total, total_today = feed.total_today, "Feed loaded");
        Ok(feed)
    }

    /// Resets the feed to its empty initial state.
    #[instrument(skip(self))]
    pub async fn clear_error(&self) -> Result<FeedState, FeedError> {
        self.dispatch(FeedAction::ClearError).await
    }
}

#[async_trait]
impl SliceClient<FeedState> for FeedClient {
    type Error = FeedError;

    fn inner(&self) -> &StoreClient<FeedState> {
        &self.inner
    }
}

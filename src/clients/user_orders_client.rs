use crate::api::{ApiError, BurgerApi, TokenStorage};
use crate::clients::slice_client::{track_with, SliceClient};
use crate::framework::{Rejection, StoreClient};
use crate::model::Order;
use crate::user_orders_store::{UserOrdersAction, UserOrdersError, UserOrdersState};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// Client for the signed-in user's order history.
#[derive(Clone)]
pub struct UserOrdersClient {
    inner: StoreClient<UserOrdersState>,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStorage>,
}

impl UserOrdersClient {
    pub fn new(
        inner: StoreClient<UserOrdersState>,
        api: Arc<dyn BurgerApi>,
        tokens: Arc<dyn TokenStorage>,
    ) -> Self {
        Self { inner, api, tokens }
    }

    /// Loads the signed-in user's orders.
    ///
    /// A failure is recorded as an explicit payload, so the history view
    /// shows the error text rather than the store default.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Order>, UserOrdersError> {
        let orders = track_with(
            &self.inner,
            UserOrdersAction::Fetch,
            async {
                let token = self.tokens.access_token().ok_or(ApiError::Unauthorized)?;
                Ok::<_, UserOrdersError>(self.api.get_user_orders(&token).await?)
            },
            |e: &UserOrdersError| Rejection::with_payload(e.to_string()),
        )
        .await?;
        info!(count = orders.len(), "History loaded");
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn clear_error(&self) -> Result<UserOrdersState, UserOrdersError> {
        self.dispatch(UserOrdersAction::ClearError).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<UserOrdersState, UserOrdersError> {
        self.dispatch(UserOrdersAction::Clear).await
    }
}

#[async_trait]
impl SliceClient<UserOrdersState> for UserOrdersClient {
    type Error = UserOrdersError;

    fn inner(&self) -> &StoreClient<UserOrdersState> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{InMemoryApi, MemoryTokenStorage};
    use crate::framework::mock::MockStore;
    use crate::framework::AsyncPhase;
    use crate::model::{Ingredient, IngredientType, User};

    #[tokio::test]
    async fn test_fetch_returns_only_own_orders() {
        let api = Arc::new(
            InMemoryApi::new(vec![Ingredient::new(
                "bun-1",
                "Краторная булка",
                IngredientType::Bun,
                1255,
            )])
            .with_account(User::new("me@example.com", "Me"), "secret")
            .with_account(User::new("other@example.com", "Other"), "secret")
            .with_session("me@example.com", "mine", "r1")
            .with_session("other@example.com", "theirs", "r2"),
        );
        api.create_order("mine", &["bun-1".into()]).await.unwrap();
        api.create_order("theirs", &["bun-1".into()]).await.unwrap();

        let mock = MockStore::<UserOrdersState>::new();
        let client = UserOrdersClient::new(
            mock.client(),
            api,
            Arc::new(MemoryTokenStorage::with_tokens("mine", "r1")),
        );

        let orders = client.fetch().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(mock.state().orders, orders);
    }

    #[tokio::test]
    async fn test_fetch_without_token_records_unauthorized() {
        let mock = MockStore::<UserOrdersState>::new();
        let api = Arc::new(InMemoryApi::new(vec![]));
        let client = UserOrdersClient::new(mock.client(), api.clone(), Arc::new(MemoryTokenStorage::new()));

        let err = client.fetch().await.unwrap_err();
        assert_eq!(err, UserOrdersError::Api(ApiError::Unauthorized));
        assert_eq!(mock.state().error.as_deref(), Some("Unauthorized"));
        assert_eq!(api.calls(), 0);
        assert_eq!(
            mock.dispatched()[1],
            UserOrdersAction::Fetch(AsyncPhase::Rejected(Rejection::with_payload(
                "Unauthorized"
            )))
        );

        let state = client.clear().await.unwrap();
        assert_eq!(state.error, None);
    }
}

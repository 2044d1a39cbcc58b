use crate::api::{ApiError, BurgerApi, TokenStorage};
use crate::clients::constructor_client::ConstructorClient;
use crate::clients::slice_client::{track, SliceClient};
use crate::framework::StoreClient;
use crate::model::{IngredientId, NewOrderResponse, Order};
use crate::order_store::{OrderAction, OrderError, OrderState};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for order submission and lookup.
///
/// Submission reads the constructor first and refuses to go further without
/// a bun and at least one filling.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<OrderState>,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStorage>,
    constructor: ConstructorClient,
}

impl OrderClient {
    pub fn new(
        inner: StoreClient<OrderState>,
        api: Arc<dyn BurgerApi>,
        tokens: Arc<dyn TokenStorage>,
        constructor: ConstructorClient,
    ) -> Self {
        Self {
            inner,
            api,
            tokens,
            constructor,
        }
    }

    /// Submits `ingredients` as a new order.
    ///
    /// Fails with [`OrderError::MissingBun`] or [`OrderError::MissingFilling`]
    /// when the constructor is incomplete. In that case nothing is dispatched
    /// and no request is made.
    #[instrument(skip(self, ingredients), fields(count = ingredients.len()))]
    pub async fn create_order(
        &self,
        ingredients: Vec<IngredientId>,
    ) -> Result<NewOrderResponse, OrderError> {
        debug!(?ingredients, "create_order called");
        let constructor = self.constructor.state().await?;
        if constructor.bun.is_none() {
            return Err(OrderError::MissingBun);
        }
        if constructor.ingredients.is_empty() {
            return Err(OrderError::MissingFilling);
        }

        info!("Submitting order");
        let created = track(&self.inner, OrderAction::Create, async {
            let token = self.tokens.access_token().ok_or(ApiError::Unauthorized)?;
            Ok::<_, OrderError>(self.api.create_order(&token, &ingredients).await?)
        })
        .await?;
        info!(number = created.order.number, "Order placed");
        Ok(created)
    }

    /// Submits whatever the constructor currently holds.
    pub async fn submit(&self) -> Result<NewOrderResponse, OrderError> {
        let constructor = self.constructor.state().await?;
        self.create_order(constructor.order_ingredient_ids()).await
    }

    /// Looks an order up by its public number.
    #[instrument(skip(self))]
    pub async fn get_order_by_number(&self, number: u64) -> Result<Order, OrderError> {
        track(&self.inner, OrderAction::GetByNumber, async {
            let response = self.api.get_order_by_number(number).await?;
            response
                .orders
                .into_iter()
                .next()
                .ok_or(OrderError::NotFound)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<OrderState, OrderError> {
        self.dispatch(OrderAction::Clear).await
    }

    /// Closes the confirmation: forgets the order and empties the constructor.
    #[instrument(skip(self))]
    pub async fn dismiss(&self) -> Result<OrderState, OrderError> {
        let state = self.clear().await?;
        self.constructor.clear().await?;
        Ok(state)
    }
}

#[async_trait]
impl SliceClient<OrderState> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<OrderState> {
        &self.inner
    }
}

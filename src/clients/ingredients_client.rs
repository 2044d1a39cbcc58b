use crate::api::BurgerApi;
use crate::clients::slice_client::{track, SliceClient};
use crate::framework::StoreClient;
use crate::ingredients_store::{IngredientsAction, IngredientsError, IngredientsState};
use crate::model::Ingredient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// Client for the ingredient catalog.
#[derive(Clone)]
pub struct IngredientsClient {
    inner: StoreClient<IngredientsState>,
    api: Arc<dyn BurgerApi>,
}

impl IngredientsClient {
    pub fn new(inner: StoreClient<IngredientsState>, api: Arc<dyn BurgerApi>) -> Self {
        Self { inner, api }
    }

    /// Loads the catalog and replaces the stored list with it.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Ingredient>, IngredientsError> {
        let ingredients = track(&self.inner, IngredientsAction::Fetch, async {
            Ok::<_, IngredientsError>(self.api.get_ingredients().await?)
        })
        .await?;
        info!(count = ingredients.len(), "Catalog loaded");
        Ok(ingredients)
    }

    #[instrument(skip(self))]
    pub async fn clear_error(&self) -> Result<IngredientsState, IngredientsError> {
        self.dispatch(IngredientsAction::ClearError).await
    }
}

#[async_trait]
impl SliceClient<IngredientsState> for IngredientsClient {
    type Error = IngredientsError;

    fn inner(&self) -> &StoreClient<IngredientsState> {
        &self.inner
    }
}

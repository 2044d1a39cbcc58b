use crate::clients::slice_client::SliceClient;
use crate::constructor_store::{ConstructorAction, ConstructorState};
use crate::framework::{StoreClient, StoreError};
use crate::model::{ConstructorIngredient, Ingredient};
use async_trait::async_trait;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Client for the burger constructor.
///
/// Every operation is a single synchronous transition, so the only possible
/// failure is the store itself going away.
#[derive(Clone)]
pub struct ConstructorClient {
    inner: StoreClient<ConstructorState>,
}

impl ConstructorClient {
    pub fn new(inner: StoreClient<ConstructorState>) -> Self {
        Self { inner }
    }

    /// Places `ingredient` in the bun slot under a fresh id.
    #[instrument(skip(self, ingredient), fields(ingredient = %ingredient.id))]
    pub async fn add_bun(&self, ingredient: Ingredient) -> Result<ConstructorState, StoreError> {
        let placed = ConstructorIngredient::from_ingredient(ingredient);
        debug!(id = %placed.id, "Placing bun");
        self.inner.dispatch(ConstructorAction::AddBun(placed)).await
    }

    /// Appends `ingredient` to the fillings under a fresh id.
    #[instrument(skip(self, ingredient), fields(ingredient = %ingredient.id))]
    pub async fn add_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> Result<ConstructorState, StoreError> {
        let placed = ConstructorIngredient::from_ingredient(ingredient);
        debug!(id = %placed.id, "Placing filling");
        self.inner
            .dispatch(ConstructorAction::AddIngredient(placed))
            .await
    }

    /// Buns go to the bun slot, everything else to the fillings.
    pub async fn add(&self, ingredient: Ingredient) -> Result<ConstructorState, StoreError> {
        if ingredient.is_bun() {
            self.add_bun(ingredient).await
        } else {
            self.add_ingredient(ingredient).await
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_ingredient(&self, id: Uuid) -> Result<ConstructorState, StoreError> {
        self.inner
            .dispatch(ConstructorAction::DeleteIngredient(id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn move_ingredient(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<ConstructorState, StoreError> {
        self.inner
            .dispatch(ConstructorAction::MoveIngredient {
                from_index,
                to_index,
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<ConstructorState, StoreError> {
        self.inner.dispatch(ConstructorAction::Clear).await
    }
}

#[async_trait]
impl SliceClient<ConstructorState> for ConstructorClient {
    type Error = StoreError;

    fn inner(&self) -> &StoreClient<ConstructorState> {
        &self.inner
    }
}

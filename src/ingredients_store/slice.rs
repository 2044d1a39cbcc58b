use super::actions::IngredientsAction;
use crate::framework::{AsyncPhase, Slice};
use crate::model::{Ingredient, IngredientId, IngredientType};

pub const DEFAULT_FETCH_ERROR: &str = "Ошибка загрузки ингредиентов";

/// The ingredient catalog and the state of its request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientsState {
    pub ingredients: Vec<Ingredient>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Slice for IngredientsState {
    type Action = IngredientsAction;

    fn reduce(&mut self, action: IngredientsAction) {
        match action {
            IngredientsAction::Fetch(AsyncPhase::Pending) => {
                self.is_loading = true;
                self.error = None;
            }
            IngredientsAction::Fetch(AsyncPhase::Fulfilled(ingredients)) => {
                self.ingredients = ingredients;
                self.is_loading = false;
                self.error = None;
            }
            IngredientsAction::Fetch(AsyncPhase::Rejected(rejection)) => {
                self.is_loading = false;
                self.error = Some(rejection.reason_or(DEFAULT_FETCH_ERROR));
            }
            IngredientsAction::ClearError => self.error = None,
        }
    }
}

impl IngredientsState {
    /// Catalog entries of one kind, in catalog order.
    pub fn by_type(&self, kind: IngredientType) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| i.kind == kind).collect()
    }

    pub fn find(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| &i.id == id)
    }
}

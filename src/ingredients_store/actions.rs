use crate::framework::AsyncPhase;
use crate::model::Ingredient;

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientsAction {
    /// Phases of the catalog request.
    Fetch(AsyncPhase<Vec<Ingredient>>),
    /// Forget the last error, keeping everything else.
    ClearError,
}

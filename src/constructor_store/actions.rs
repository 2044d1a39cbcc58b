//! Transitions of the burger constructor.

use crate::model::ConstructorIngredient;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorAction {
    /// Puts a bun in the bun slot, replacing whatever was there.
    AddBun(ConstructorIngredient),
    /// Appends a filling or sauce.
    AddIngredient(ConstructorIngredient),
    /// Removes the placement with this generated id. Unknown ids are ignored.
    DeleteIngredient(Uuid),
    /// Moves the filling at `from_index` to `to_index`.
    ///
    /// If either index is out of range, the list is left exactly as it was.
    MoveIngredient { from_index: usize, to_index: usize },
    /// Back to an empty constructor.
    Clear,
}

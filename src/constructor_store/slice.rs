use super::actions::ConstructorAction;
use crate::framework::Slice;
use crate::model::{ConstructorIngredient, IngredientId};

/// The burger being assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorState {
    pub bun: Option<ConstructorIngredient>,
    pub ingredients: Vec<ConstructorIngredient>,
}

impl Slice for ConstructorState {
    type Action = ConstructorAction;

    fn reduce(&mut self, action: ConstructorAction) {
        match action {
            ConstructorAction::AddBun(bun) => self.bun = Some(bun),
            ConstructorAction::AddIngredient(item) => self.ingredients.push(item),
            ConstructorAction::DeleteIngredient(id) => self.ingredients.retain(|i| i.id != id),
            ConstructorAction::MoveIngredient {
                from_index,
                to_index,
            } => {
                let len = self.ingredients.len();
                if from_index < len && to_index < len {
                    let item = self.ingredients.remove(from_index);
                    self.ingredients.insert(to_index, item);
                }
            }
            ConstructorAction::Clear => *self = Self::default(),
        }
    }
}

impl ConstructorState {
    /// Twice the bun (top and bottom) plus every filling.
    pub fn total_price(&self) -> u64 {
        let bun = self
            .bun
            .as_ref()
            .map_or(0, |b| u64::from(b.ingredient.price) * 2);
        bun + self
            .ingredients
            .iter()
            .map(|i| u64::from(i.ingredient.price))
            .sum::<u64>()
    }

    /// Ids in the order the API expects: bun, fillings, bun.
    ///
    /// Without a bun only the fillings are listed.
    pub fn order_ingredient_ids(&self) -> Vec<IngredientId> {
        let bun = self.bun.as_ref().map(|b| b.ingredient.id.clone());
        bun.iter()
            .cloned()
            .chain(self.ingredients.iter().map(|i| i.ingredient.id.clone()))
            .chain(bun.iter().cloned())
            .collect()
    }

    /// How many times a catalog ingredient is used. A bun counts twice.
    pub fn count_of(&self, id: &IngredientId) -> usize {
        let buns = match &self.bun {
            Some(bun) if &bun.ingredient.id == id => 2,
            _ => 0,
        };
        buns + self
            .ingredients
            .iter()
            .filter(|i| &i.ingredient.id == id)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, IngredientType};
    use uuid::Uuid;

    fn bun(id: &str) -> ConstructorIngredient {
        ConstructorIngredient::from_ingredient(Ingredient::new(
            id,
            "Краторная булка",
            IngredientType::Bun,
            1255,
        ))
    }

    fn main(id: &str) -> ConstructorIngredient {
        ConstructorIngredient::from_ingredient(Ingredient::new(
            id,
            "Говяжий метеорит",
            IngredientType::Main,
            424,
        ))
    }

    fn sauce(id: &str) -> ConstructorIngredient {
        ConstructorIngredient::from_ingredient(Ingredient::new(
            id,
            "Соус с шипами",
            IngredientType::Sauce,
            150,
        ))
    }

    fn reduce_all(actions: Vec<ConstructorAction>) -> ConstructorState {
        let mut state = ConstructorState::default();
        for action in actions {
            state.reduce(action);
        }
        state
    }

    fn ids(state: &ConstructorState) -> Vec<String> {
        state
            .ingredients
            .iter()
            .map(|i| i.ingredient.id.0.clone())
            .collect()
    }

    #[test]
    fn test_add_bun_sets_slot() {
        let b = bun("bun-1");
        let state = reduce_all(vec![ConstructorAction::AddBun(b.clone())]);
        assert_eq!(state.bun, Some(b));
        assert!(state.ingredients.is_empty());
    }

    #[test]
    fn test_add_bun_last_call_wins() {
        let first = bun("bun-1");
        let second = bun("bun-2");
        let state = reduce_all(vec![
            ConstructorAction::AddBun(first),
            ConstructorAction::AddBun(second.clone()),
        ]);
        assert_eq!(state.bun, Some(second));
        assert!(state.ingredients.is_empty());
    }

    #[test]
    fn test_add_ingredient_keeps_call_order() {
        let a = main("main-1");
        let b = sauce("sauce-1");
        let c = main("main-1");
        let state = reduce_all(vec![
            ConstructorAction::AddIngredient(a.clone()),
            ConstructorAction::AddIngredient(b.clone()),
            ConstructorAction::AddIngredient(c.clone()),
        ]);
        assert!(state.bun.is_none());
        assert_eq!(state.ingredients, vec![a, b, c]);
    }

    #[test]
    fn test_delete_removes_exactly_one_placement() {
        let a = main("main-1");
        let b = main("main-1");
        let c = sauce("sauce-1");
        let mut state = reduce_all(vec![
            ConstructorAction::AddIngredient(a.clone()),
            ConstructorAction::AddIngredient(b.clone()),
            ConstructorAction::AddIngredient(c.clone()),
        ]);

        state.reduce(ConstructorAction::DeleteIngredient(a.id));
        assert_eq!(state.ingredients, vec![b, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut state = reduce_all(vec![ConstructorAction::AddIngredient(main("main-1"))]);
        let before = state.clone();
        state.reduce(ConstructorAction::DeleteIngredient(Uuid::new_v4()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_from_first_to_last() {
        let mut state = reduce_all(vec![
            ConstructorAction::AddIngredient(main("main-1")),
            ConstructorAction::AddIngredient(sauce("sauce-1")),
            ConstructorAction::AddIngredient(main("main-2")),
        ]);
        assert_eq!(ids(&state), ["main-1", "sauce-1", "main-2"]);

        state.reduce(ConstructorAction::MoveIngredient {
            from_index: 0,
            to_index: 2,
        });
        assert_eq!(ids(&state), ["sauce-1", "main-2", "main-1"]);
    }

    #[test]
    fn test_move_from_last_to_first() {
        let mut state = reduce_all(vec![
            ConstructorAction::AddIngredient(main("main-1")),
            ConstructorAction::AddIngredient(sauce("sauce-1")),
            ConstructorAction::AddIngredient(main("main-2")),
        ]);
        state.reduce(ConstructorAction::MoveIngredient {
            from_index: 2,
            to_index: 0,
        });
        assert_eq!(ids(&state), ["main-2", "main-1", "sauce-1"]);
    }

    #[test]
    fn test_move_out_of_range_is_ignored_not_clamped() {
        let mut state = reduce_all(vec![
            ConstructorAction::AddIngredient(main("main-1")),
            ConstructorAction::AddIngredient(sauce("sauce-1")),
        ]);
        let before = state.clone();

        for (from_index, to_index) in [(0, 5), (5, 0), (2, 1), (1, 2), (usize::MAX, 0)] {
            state.reduce(ConstructorAction::MoveIngredient {
                from_index,
                to_index,
            });
            assert_eq!(state, before, "move {from_index} -> {to_index}");
        }
    }

    #[test]
    fn test_move_on_empty_list_is_ignored() {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::MoveIngredient {
            from_index: 0,
            to_index: 0,
        });
        assert_eq!(state, ConstructorState::default());
    }

    #[test]
    fn test_bun_then_two_fillings_then_swap() {
        let b = bun("bun-1");
        let x = main("main-1");
        let y = sauce("sauce-1");
        let state = reduce_all(vec![
            ConstructorAction::AddBun(b.clone()),
            ConstructorAction::AddIngredient(x.clone()),
            ConstructorAction::AddIngredient(y.clone()),
            ConstructorAction::MoveIngredient {
                from_index: 0,
                to_index: 1,
            },
        ]);
        assert_eq!(state.ingredients, vec![y, x]);
        assert_eq!(state.bun, Some(b));
    }

    #[test]
    fn test_clear_always_restores_initial_state() {
        let state = reduce_all(vec![
            ConstructorAction::AddBun(bun("bun-1")),
            ConstructorAction::AddIngredient(main("main-1")),
            ConstructorAction::Clear,
        ]);
        assert_eq!(state, ConstructorState::default());
        assert!(state.is_empty());

        let already_empty = reduce_all(vec![ConstructorAction::Clear]);
        assert_eq!(already_empty, ConstructorState::default());
    }

    #[test]
    fn test_selectors() {
        let state = reduce_all(vec![
            ConstructorAction::AddBun(bun("bun-1")),
            ConstructorAction::AddIngredient(main("main-1")),
            ConstructorAction::AddIngredient(sauce("sauce-1")),
            ConstructorAction::AddIngredient(main("main-1")),
        ]);

        assert_eq!(state.total_price(), 1255 * 2 + 424 * 2 + 150);
        let order: Vec<String> = state
            .order_ingredient_ids()
            .into_iter()
            .map(|id| id.0)
            .collect();
        assert_eq!(order, ["bun-1", "main-1", "sauce-1", "main-1", "bun-1"]);
        assert_eq!(state.count_of(&"bun-1".into()), 2);
        assert_eq!(state.count_of(&"main-1".into()), 2);
        assert_eq!(state.count_of(&"nothing".into()), 0);
    }

    #[test]
    fn test_total_price_does_not_overflow_u32() {
        let pricey = |id: &str, kind| {
            ConstructorIngredient::from_ingredient(Ingredient::new(
                id,
                "Золотая булка",
                kind,
                u32::MAX,
            ))
        };
        let state = reduce_all(vec![
            ConstructorAction::AddBun(pricey("bun-gold", IngredientType::Bun)),
            ConstructorAction::AddIngredient(pricey("main-gold", IngredientType::Main)),
            ConstructorAction::AddIngredient(pricey("main-gold", IngredientType::Main)),
        ]);
        assert_eq!(state.total_price(), u64::from(u32::MAX) * 4);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ingredient = Ingredient::new("main-1", "Говяжий метеорит", IngredientType::Main, 424);
        let first = ConstructorIngredient::from_ingredient(ingredient.clone());
        let second = ConstructorIngredient::from_ingredient(ingredient);
        assert_ne!(first.id, second.id);
    }
}

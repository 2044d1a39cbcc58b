//! Catalog ingredients and their constructor placements.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Server-assigned identifier of a catalog ingredient (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for IngredientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientType {
    Bun,
    Main,
    Sauce,
}

/// A catalog entry. Immutable reference data: fetched once, read everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: IngredientId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientType,
    pub price: u32,
    pub proteins: u32,
    pub fat: u32,
    pub carbohydrates: u32,
    pub calories: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_large: String,
    #[serde(default)]
    pub image_mobile: String,
}

impl Ingredient {
    /// Creates an ingredient with zeroed nutrition and no images.
    ///
    /// Mostly useful in tests and fixtures.
    pub fn new(
        id: impl Into<IngredientId>,
        name: impl Into<String>,
        kind: IngredientType,
        price: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            price,
            proteins: 0,
            fat: 0,
            carbohydrates: 0,
            calories: 0,
            image: String::new(),
            image_large: String::new(),
            image_mobile: String::new(),
        }
    }

    pub fn is_bun(&self) -> bool {
        self.kind == IngredientType::Bun
    }
}

/// One use of an ingredient inside the burger being assembled.
///
/// The same catalog ingredient may appear several times; `id` tells the
/// placements apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub id: Uuid,
}

impl ConstructorIngredient {
    /// Places `ingredient` with a freshly generated id.
    pub fn from_ingredient(ingredient: Ingredient) -> Self {
        Self {
            ingredient,
            id: Uuid::new_v4(),
        }
    }
}

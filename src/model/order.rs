use crate::model::IngredientId;
use serde::{Deserialize, Serialize};

/// An order as returned by the server. Read-only once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub number: u64,
    pub name: String,
    pub status: String,
    pub ingredients: Vec<IngredientId>,
    pub created_at: String,
    pub updated_at: String,
}

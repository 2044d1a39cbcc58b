//! # External Collaborators
//!
//! The stores never talk to the outside world. The clients do, through two
//! seams:
//!
//! - [`BurgerApi`] - the ordering REST API (ingredients, orders, auth)
//! - [`TokenStorage`] - where the access and refresh tokens live
//!
//! [`InMemoryApi`] and [`MemoryTokenStorage`] are self-contained
//! implementations used by the demo binary and the tests.

pub mod memory;
pub mod tokens;

pub use memory::InMemoryApi;
pub use tokens::{MemoryTokenStorage, TokenStorage};

use crate::model::{
    AuthResponse, FeedsResponse, Ingredient, IngredientId, LoginData, NewOrderResponse,
    OrderByNumberResponse, Order, RegisterData, UserResponse, UserUpdate,
};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by the API collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with `success: false` and this message.
    #[error("{0}")]
    Server(String),

    /// No valid access token for an endpoint that needs one.
    #[error("Unauthorized")]
    Unauthorized,

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Network(String),
}

/// The ordering API as seen by the clients.
#[async_trait]
pub trait BurgerApi: Send + Sync {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError>;

    async fn get_feeds(&self) -> Result<FeedsResponse, ApiError>;

    async fn get_user_orders(&self, access_token: &str) -> Result<Vec<Order>, ApiError>;

    async fn create_order(
        &self,
        access_token: &str,
        ingredients: &[IngredientId],
    ) -> Result<NewOrderResponse, ApiError>;

    async fn get_order_by_number(&self, number: u64) -> Result<OrderByNumberResponse, ApiError>;

    async fn login(&self, data: LoginData) -> Result<AuthResponse, ApiError>;

    async fn register(&self, data: RegisterData) -> Result<AuthResponse, ApiError>;

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError>;

    async fn get_user(&self, access_token: &str) -> Result<UserResponse, ApiError>;

    async fn update_user(
        &self,
        access_token: &str,
        update: UserUpdate,
    ) -> Result<UserResponse, ApiError>;
}

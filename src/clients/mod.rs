//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).
//!
//! Each store has a client that hides its actions behind named methods.
//! Clients for network-backed stores also run the request itself: they
//! dispatch `Pending`, call [`BurgerApi`](crate::api::BurgerApi), then
//! dispatch the outcome.

pub mod constructor_client;
pub mod feed_client;
pub mod ingredients_client;
pub mod order_client;
pub mod slice_client;
pub mod user_client;
pub mod user_orders_client;

pub use constructor_client::*;
pub use feed_client::*;
pub use ingredients_client::*;
pub use order_client::*;
pub use slice_client::SliceClient;
pub use user_client::*;
pub use user_orders_client::*;

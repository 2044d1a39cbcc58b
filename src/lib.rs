//! # Burger Store
//!
//! > **The client-side state layer of a burger-ordering application.**
//!
//! Six small stores hold everything the UI needs: the burger being
//! assembled, the ingredient catalog, the order being submitted, the user
//! session, the user's order history and the public feed. Each store is a
//! plain value plus a reducer, owned by its own Tokio task.
//!
//! ## Core Concepts
//!
//! ### One loop, six stores
//! [`StoreActor<S>`](framework::StoreActor) works for anything that implements
//! [`Slice`](framework::Slice). The message loop is written once. Each store
//! only supplies its state type, its action enum and a `reduce` function.
//!
//! ### Requests are just actions
//! Network-backed operations go through three phases
//! ([`AsyncPhase`](framework::AsyncPhase)): `Pending`, then `Fulfilled` or
//! `Rejected`. Clients dispatch them as ordinary actions around the API call.
//! Reducers never do I/O.
//!
//! ### Mocking
//! [`MockStore`](framework::mock::MockStore) records every action a client
//! dispatches, so client logic can be tested without running real stores.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store actor, client and request phases.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`BurgerSystem`](lifecycle::BurgerSystem) starts the six stores, wires
//! their clients to the API and token storage, and shuts them down.
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients such as [`OrderClient`](clients::OrderClient) and
//! [`UserClient`](clients::UserClient). This is where requests are run and
//! tokens are handled.
//!
//! ### 4. The Stores
//! [`constructor_store`], [`ingredients_store`], [`order_store`],
//! [`user_store`], [`user_orders_store`] and [`feed_store`]. Each has its
//! state, actions, reducer tests and a `new()` factory.
//!
//! ### 5. The Outside World ([`api`], [`model`])
//! The [`BurgerApi`](api::BurgerApi) and [`TokenStorage`](api::TokenStorage)
//! seams, an in-memory backend, and the wire types.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Smaller channels
//! BURGER_STORE_BUFFER=4 cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod constructor_store;
pub mod feed_store;
pub mod framework;
pub mod ingredients_store;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod user_orders_store;
pub mod user_store;

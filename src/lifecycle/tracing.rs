//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter
//! filtered by `RUST_LOG`. Module paths are hidden (`with_target(false)`);
//! each store actor tags its lines with a `slice` field instead.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown with the number of reductions
//! - **Dispatches**: every action at `debug`, with its payload
//! - **Client calls**: one span per client method, rejected requests at `warn`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run            # every action with its payload
//! RUST_LOG=burger_store::clients=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a submitted order reads like:
//!
//! ```text
//! INFO create_order: Submitting order count=4
//! INFO create_order: Order placed number=1 count=4
//! ```
//!
//! With `RUST_LOG=debug` the same request also shows both dispatches
//! (`Create(Pending)`, then `Create(Fulfilled(..))`) as they reach the store.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! A scripted session against the in-memory backend: load the catalog,
//! sign up, build a burger, order it, look at the feed and sign out.

use burger_store::api::{InMemoryApi, MemoryTokenStorage};
use burger_store::clients::SliceClient;
use burger_store::config::StoreConfig;
use burger_store::lifecycle::{setup_tracing, BurgerSystem};
use burger_store::model::{IngredientType, RegisterData};
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, Instrument};

const CATALOG: &str = include_str!("../fixtures/ingredients.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let api = Arc::new(InMemoryApi::from_catalog_json(CATALOG)?);
    let tokens = Arc::new(MemoryTokenStorage::new());
    let system = BurgerSystem::start(StoreConfig::from_env(), api, tokens);

    // Nobody is signed in yet; this only flips `is_auth_checked`.
    if system.user.check_auth().await.is_err() {
        info!("No session, signing up");
    }

    let catalog = system.ingredients.fetch().await?;
    info!(count = catalog.len(), "Catalog ready");

    let user = system
        .user
        .register(RegisterData {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password".to_string(),
        })
        .await?;
    info!(name = %user.name, "Signed up");

    let span = tracing::info_span!("assembly");
    async {
        // Ordering with an empty constructor is refused before any request.
        if let Err(e) = system.order.submit().await {
            info!(reason = %e, "Refused");
        }

        let state = system.ingredients.state().await?;
        if let Some(bun) = state.by_type(IngredientType::Bun).first() {
            system.constructor.add((*bun).clone()).await?;
        }
        for kind in [IngredientType::Main, IngredientType::Sauce] {
            for ingredient in state.by_type(kind) {
                system.constructor.add(ingredient.clone()).await?;
            }
        }
        let burger = system.constructor.move_ingredient(0, 2).await?;
        info!(
            fillings = burger.ingredients.len(),
            price = burger.total_price(),
            "Burger assembled"
        );
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    match system.order.submit().instrument(span).await {
        Ok(created) => {
            info!(number = created.order.number, name = %created.name, "Order placed");
            let found = system.order.get_order_by_number(created.order.number).await?;
            info!(status = %found.status, "Order looked up");
            system.order.dismiss().await?;
        }
        Err(e) => error!(error = %e, "Order failed"),
    }

    let feed = system.feed.fetch().await?;
    info!(total = feed.total, total_today = feed.total_today, "Feed");
    let history = system.user_orders.fetch().await?;
    info!(count = history.len(), "History");

    system.user.logout().await?;
    system.user_orders.clear().await?;

    system.shutdown().await?;
    Ok(())
}

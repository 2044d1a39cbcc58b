use burger_store::api::{ApiError, BurgerApi, InMemoryApi, MemoryTokenStorage, TokenStorage};
use burger_store::clients::SliceClient;
use burger_store::config::StoreConfig;
use burger_store::lifecycle::BurgerSystem;
use burger_store::model::{Ingredient, IngredientId, IngredientType, LoginData, RegisterData, User};
use burger_store::order_store::OrderError;
use std::sync::Arc;

const CATALOG: &str = include_str!("../fixtures/ingredients.json");

const BUN: &str = "643d69a5c3f7b9001cfa093d";
const PATTY: &str = "643d69a5c3f7b9001cfa0941";
const FILLET: &str = "643d69a5c3f7b9001cfa093e";
const SAUCE: &str = "643d69a5c3f7b9001cfa0942";

struct Fixture {
    system: BurgerSystem,
    api: Arc<InMemoryApi>,
    tokens: Arc<MemoryTokenStorage>,
}

fn start(api: InMemoryApi, tokens: MemoryTokenStorage) -> Fixture {
    let api = Arc::new(api);
    let tokens = Arc::new(tokens);
    let system = BurgerSystem::start(StoreConfig::default(), api.clone(), tokens.clone());
    Fixture {
        system,
        api,
        tokens,
    }
}

fn catalog_api() -> InMemoryApi {
    InMemoryApi::from_catalog_json(CATALOG).expect("fixture parses")
}

async fn ingredient(system: &BurgerSystem, id: &str) -> Ingredient {
    system
        .ingredients
        .state()
        .await
        .unwrap()
        .find(&IngredientId::from(id))
        .cloned()
        .expect("ingredient in catalog")
}

/// Full end-to-end session with all real stores.
#[tokio::test]
async fn test_full_ordering_session() {
    let Fixture {
        system,
        api,
        tokens,
    } = start(
        catalog_api().with_next_order_number(96383),
        MemoryTokenStorage::new(),
    );

    // Startup check without a stored session
    assert!(system.user.check_auth().await.is_err());
    let session = system.user.state().await.unwrap();
    assert!(session.is_auth_checked);
    assert_eq!(session.error, None);

    // Catalog
    let catalog = system.ingredients.fetch().await.unwrap();
    assert_eq!(catalog.len(), 5);

    // Sign up
    let user = system
        .user
        .register(RegisterData {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "password".into(),
        })
        .await
        .unwrap();
    assert_eq!(user.name, "Alice");
    assert!(tokens.access_token().is_some());

    // Build: bun, patty, sauce
    system.constructor.add(ingredient(&system, BUN).await).await.unwrap();
    system.constructor.add(ingredient(&system, PATTY).await).await.unwrap();
    let burger = system
        .constructor
        .add(ingredient(&system, SAUCE).await)
        .await
        .unwrap();
    assert_eq!(burger.total_price(), 988 * 2 + 424 + 90);

    // Order
    let created = system.order.submit().await.unwrap();
    assert_eq!(created.order.number, 96383);
    let ids: Vec<&str> = created.order.ingredients.iter().map(|i| i.0.as_str()).collect();
    assert_eq!(ids, [BUN, PATTY, SAUCE, BUN]);
    let order = system.order.state().await.unwrap();
    assert_eq!(order.order_number, Some(96383));
    assert!(!order.is_loading);

    // Closing the confirmation empties the constructor
    system.order.dismiss().await.unwrap();
    assert!(system.constructor.state().await.unwrap().is_empty());
    assert_eq!(system.order.state().await.unwrap().current_order, None);

    // Feed and history both see the order
    system.feed.fetch().await.unwrap();
    let feed = system.feed.state().await.unwrap();
    assert_eq!(feed.total, 1);
    assert_eq!(feed.total_today, 1);
    assert_eq!(system.user_orders.fetch().await.unwrap().len(), 1);

    // Sign out
    system.user.logout().await.unwrap();
    assert!(tokens.access_token().is_none());
    assert_eq!(system.user.state().await.unwrap().user, None);

    assert!(api.calls() > 0);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_swap_two_fillings() {
    let Fixture { system, .. } = start(catalog_api(), MemoryTokenStorage::new());
    system.ingredients.fetch().await.unwrap();

    let bun = ingredient(&system, BUN).await;
    let x = ingredient(&system, PATTY).await;
    let y = ingredient(&system, FILLET).await;

    system.constructor.add_bun(bun).await.unwrap();
    system.constructor.add_ingredient(x).await.unwrap();
    system.constructor.add_ingredient(y).await.unwrap();
    let state = system.constructor.move_ingredient(0, 1).await.unwrap();

    let order: Vec<&str> = state
        .ingredients
        .iter()
        .map(|i| i.ingredient.id.0.as_str())
        .collect();
    assert_eq!(order, [FILLET, PATTY]);
    assert_eq!(state.bun.map(|b| b.ingredient.id.0), Some(BUN.to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bun_without_filling_is_refused_without_request() {
    let Fixture { system, api, .. } = start(
        catalog_api()
            .with_account(User::new("test@example.com", "Test"), "secret")
            .with_session("test@example.com", "token", "refresh"),
        MemoryTokenStorage::with_tokens("token", "refresh"),
    );
    let bun = Ingredient::new(BUN, "Флюоресцентная булка R2-D3", IngredientType::Bun, 988);
    system.constructor.add(bun).await.unwrap();

    let err = system
        .order
        .create_order(vec![BUN.into(), BUN.into()])
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::MissingFilling);
    assert_eq!(err.to_string(), "Добавьте начинку для заказа");
    assert_eq!(api.calls(), 0);

    let order = system.order.state().await.unwrap();
    assert!(!order.is_loading);
    assert_eq!(order.error, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_feed_reports_totals_after_failure_and_retry() {
    let Fixture { system, api, .. } = start(
        catalog_api()
            .with_account(User::new("test@example.com", "Test"), "secret")
            .with_session("test@example.com", "token", "refresh"),
        MemoryTokenStorage::new(),
    );
    api.create_order("token", &[BUN.into(), PATTY.into(), BUN.into()])
        .await
        .unwrap();
    api.create_order("token", &[BUN.into(), SAUCE.into(), BUN.into()])
        .await
        .unwrap();

    api.fail_next(ApiError::Network("offline".into()));
    assert!(system.feed.fetch().await.is_err());
    let failed = system.feed.state().await.unwrap();
    assert_eq!(failed.error.as_deref(), Some("Network error: offline"));
    assert!(!failed.is_loading);

    system.feed.fetch().await.unwrap();
    let feed = system.feed.state().await.unwrap();
    assert_eq!(feed.orders.len(), 2);
    assert_eq!(feed.total, 2);
    assert_eq!(feed.total_today, 2);
    assert_eq!(feed.error, None);
    // Newest first
    assert!(feed.orders[0].number > feed.orders[1].number);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stored_session_is_restored_on_startup() {
    let Fixture { system, .. } = start(
        catalog_api()
            .with_account(User::new("test@example.com", "Test User"), "secret")
            .with_session("test@example.com", "token", "refresh"),
        MemoryTokenStorage::with_tokens("token", "refresh"),
    );

    let user = system.user.check_auth().await.unwrap();
    assert_eq!(user.name, "Test User");
    let session = system.user.state().await.unwrap();
    assert!(session.is_auth_checked);
    assert_eq!(session.user, Some(user));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_login_then_success() {
    let Fixture { system, .. } = start(
        catalog_api().with_account(User::new("test@example.com", "Test User"), "secret"),
        MemoryTokenStorage::new(),
    );

    let wrong = LoginData {
        email: "test@example.com".into(),
        password: "wrong".into(),
    };
    assert!(system.user.login(wrong).await.is_err());
    let session = system.user.state().await.unwrap();
    assert_eq!(
        session.error.as_deref(),
        Some("email or password are incorrect")
    );

    system.user.clear_error().await.unwrap();
    let right = LoginData {
        email: "test@example.com".into(),
        password: "secret".into(),
    };
    system.user.login(right).await.unwrap();
    let session = system.user.state().await.unwrap();
    assert_eq!(session.error, None);
    assert_eq!(session.user.map(|u| u.name), Some("Test User".to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_lookup_by_unknown_number() {
    let Fixture { system, .. } = start(catalog_api(), MemoryTokenStorage::new());

    let err = system.order.get_order_by_number(42).await.unwrap_err();
    assert_eq!(err, OrderError::NotFound);
    let order = system.order.state().await.unwrap();
    assert_eq!(order.error.as_deref(), Some("Заказ не найден"));
    assert!(!order.is_loading);

    system.shutdown().await.unwrap();
}

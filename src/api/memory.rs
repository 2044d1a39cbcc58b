//! An in-memory ordering backend.
//!
//! `InMemoryApi` keeps users, sessions and orders in a single locked struct
//! and answers like the real service would, including its error messages.
//! Failures can be injected with [`InMemoryApi::fail_next`].

use super::{ApiError, BurgerApi};
use crate::model::{
    AuthResponse, FeedsResponse, Ingredient, IngredientId, IngredientsResponse, LoginData,
    NewOrderResponse, Order, OrderByNumberResponse, RegisterData, User, UserResponse, UserUpdate,
};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
struct Inner {
    catalog: Vec<Ingredient>,
    accounts: HashMap<String, Account>,
    // token -> account email
    access: HashMap<String, String>,
    refresh: HashMap<String, String>,
    orders: Vec<(Order, String)>,
    next_number: u64,
    failure: Option<ApiError>,
}

/// See the [module docs](self).
pub struct InMemoryApi {
    inner: Mutex<Inner>,
    calls: AtomicUsize,
}

impl InMemoryApi {
    /// A backend serving `catalog`.
    pub fn new(catalog: Vec<Ingredient>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                catalog,
                next_number: 1,
                ..Inner::default()
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// A backend serving the catalog in an `{ "success", "data" }` document.
    pub fn from_catalog_json(json: &str) -> Result<Self, serde_json::Error> {
        let response: IngredientsResponse = serde_json::from_str(json)?;
        Ok(Self::new(response.data))
    }

    /// Numbers handed to new orders start from `number`.
    pub fn with_next_order_number(self, number: u64) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.next_number = number;
        }
        self
    }

    /// Registers an account directly, bypassing the API.
    pub fn with_account(self, user: User, password: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.accounts.insert(
                user.email.clone(),
                Account {
                    user,
                    password: password.into(),
                },
            );
        }
        self
    }

    /// Makes `email` signed in under the given tokens.
    pub fn with_session(self, email: &str, access: &str, refresh: &str) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.access.insert(access.to_string(), email.to_string());
            inner.refresh.insert(refresh.to_string(), email.to_string());
        }
        self
    }

    /// The next call, whatever it is, fails with `error`.
    pub fn fail_next(&self, error: ApiError) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failure = Some(error);
        }
    }

    /// How many API calls have been made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Counts the call, takes the lock and fires any injected failure.
    fn begin(&self, endpoint: &'static str) -> Result<MutexGuard<'_, Inner>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!(endpoint, "API call");
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApiError::Network("backend unavailable".to_string()))?;
        let failure = inner.failure.take();
        match failure {
            Some(error) => Err(error),
            None => Ok(inner),
        }
    }
}

impl Inner {
    fn email_for(&self, access_token: &str) -> Result<String, ApiError> {
        self.access
            .get(access_token)
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }

    fn issue_tokens(&mut self, email: &str) -> (String, String) {
        let access = Uuid::new_v4().to_string();
        let refresh = Uuid::new_v4().to_string();
        self.access.insert(access.clone(), email.to_string());
        self.refresh.insert(refresh.clone(), email.to_string());
        (format!("Bearer {access}"), refresh)
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl BurgerApi for InMemoryApi {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let inner = self.begin("ingredients")?;
        Ok(inner.catalog.clone())
    }

    async fn get_feeds(&self) -> Result<FeedsResponse, ApiError> {
        let inner = self.begin("orders/all")?;
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let orders: Vec<Order> = inner.orders.iter().rev().map(|(o, _)| o.clone()).collect();
        let total_today = orders
            .iter()
            .filter(|o| o.created_at.starts_with(&today))
            .count() as u64;
        Ok(FeedsResponse {
            success: true,
            total: orders.len() as u64,
            total_today,
            orders,
        })
    }

    async fn get_user_orders(&self, access_token: &str) -> Result<Vec<Order>, ApiError> {
        let inner = self.begin("orders")?;
        let email = inner.email_for(access_token)?;
        Ok(inner
            .orders
            .iter()
            .filter(|(_, owner)| *owner == email)
            .map(|(o, _)| o.clone())
            .collect())
    }

    async fn create_order(
        &self,
        access_token: &str,
        ingredients: &[IngredientId],
    ) -> Result<NewOrderResponse, ApiError> {
        let mut inner = self.begin("orders")?;
        let email = inner.email_for(access_token)?;
        if ingredients.is_empty() {
            return Err(ApiError::Server(
                "Ingredient ids must be provided".to_string(),
            ));
        }

        let mut names: Vec<&str> = Vec::new();
        for id in ingredients {
            let ingredient = inner
                .catalog
                .iter()
                .find(|i| &i.id == id)
                .ok_or_else(|| {
                    ApiError::Server("One or more ids provided are incorrect".to_string())
                })?;
            if !names.contains(&ingredient.name.as_str()) {
                names.push(&ingredient.name);
            }
        }
        let name = format!("{} бургер", names.join(" "));

        let created = now();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            number: inner.next_number,
            name: name.clone(),
            status: "done".to_string(),
            ingredients: ingredients.to_vec(),
            created_at: created.clone(),
            updated_at: created,
        };
        inner.next_number += 1;
        inner.orders.push((order.clone(), email));

        Ok(NewOrderResponse {
            success: true,
            order,
            name,
        })
    }

    async fn get_order_by_number(&self, number: u64) -> Result<OrderByNumberResponse, ApiError> {
        let inner = self.begin("orders/{number}")?;
        let orders = inner
            .orders
            .iter()
            .filter(|(o, _)| o.number == number)
            .map(|(o, _)| o.clone())
            .collect();
        Ok(OrderByNumberResponse {
            success: true,
            orders,
        })
    }

    async fn login(&self, data: LoginData) -> Result<AuthResponse, ApiError> {
        let mut inner = self.begin("auth/login")?;
        let user = match inner.accounts.get(&data.email) {
            Some(account) if account.password == data.password => account.user.clone(),
            _ => {
                return Err(ApiError::Server(
                    "email or password are incorrect".to_string(),
                ))
            }
        };
        let (access, refresh) = inner.issue_tokens(&user.email);
        Ok(AuthResponse {
            success: true,
            user,
            access_token: Some(access),
            refresh_token: Some(refresh),
        })
    }

    async fn register(&self, data: RegisterData) -> Result<AuthResponse, ApiError> {
        let mut inner = self.begin("auth/register")?;
        if inner.accounts.contains_key(&data.email) {
            return Err(ApiError::Server("User already exists".to_string()));
        }
        let user = User::new(data.email.clone(), data.name);
        inner.accounts.insert(
            data.email,
            Account {
                user: user.clone(),
                password: data.password,
            },
        );
        let (access, refresh) = inner.issue_tokens(&user.email);
        Ok(AuthResponse {
            success: true,
            user,
            access_token: Some(access),
            refresh_token: Some(refresh),
        })
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        let mut inner = self.begin("auth/logout")?;
        let email = inner
            .refresh
            .remove(refresh_token)
            .ok_or_else(|| ApiError::Server("Token required".to_string()))?;
        inner.access.retain(|_, owner| *owner != email);
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<UserResponse, ApiError> {
        let inner = self.begin("auth/user")?;
        let email = inner.email_for(access_token)?;
        let account = inner.accounts.get(&email).ok_or(ApiError::Unauthorized)?;
        Ok(UserResponse {
            success: true,
            user: account.user.clone(),
        })
    }

    async fn update_user(
        &self,
        access_token: &str,
        update: UserUpdate,
    ) -> Result<UserResponse, ApiError> {
        let mut guard = self.begin("auth/user")?;
        let inner = &mut *guard;
        let email = inner.email_for(access_token)?;
        if let Some(new_email) = &update.email {
            if *new_email != email && inner.accounts.contains_key(new_email) {
                return Err(ApiError::Server(
                    "User with such email already exists".to_string(),
                ));
            }
        }
        let mut account = inner.accounts.remove(&email).ok_or(ApiError::Unauthorized)?;
        if let Some(name) = update.name {
            account.user.name = name;
        }
        if let Some(password) = update.password {
            account.password = password;
        }
        if let Some(new_email) = update.email {
            account.user.email = new_email.clone();
            for owner in inner.access.values_mut().chain(inner.refresh.values_mut()) {
                if *owner == email {
                    *owner = new_email.clone();
                }
            }
            for (_, owner) in inner.orders.iter_mut() {
                if *owner == email {
                    *owner = new_email.clone();
                }
            }
        }
        let user = account.user.clone();
        inner.accounts.insert(user.email.clone(), account);
        Ok(UserResponse { success: true, user })
    }
}

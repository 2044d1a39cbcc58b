//! Token persistence.
//!
//! In the browser the access token lives in a cookie and the refresh token in
//! local storage. Here both sit behind [`TokenStorage`].

use std::sync::RwLock;

/// Where the session tokens are kept between requests.
pub trait TokenStorage: Send + Sync {
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Stores an access token. A leading `Bearer ` is stripped.
    fn set_access_token(&self, token: &str);

    fn set_refresh_token(&self, token: &str);

    /// Forgets both tokens.
    fn clear(&self);
}

/// Strips the `Bearer ` scheme the server puts in front of access tokens.
pub fn strip_bearer(token: &str) -> &str {
    token.strip_prefix("Bearer ").unwrap_or(token)
}

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

/// Process-local [`TokenStorage`].
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    tokens: RwLock<Tokens>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a session, as after a page reload.
    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            tokens: RwLock::new(Tokens {
                access: Some(access.into()),
                refresh: Some(refresh.into()),
            }),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn access_token(&self) -> Option<String> {
        self.tokens.read().ok()?.access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().ok()?.refresh.clone()
    }

    fn set_access_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.access = Some(strip_bearer(token).to_string());
        }
    }

    fn set_refresh_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.refresh = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut tokens) = self.tokens.write() {
            *tokens = Tokens::default();
        }
    }
}

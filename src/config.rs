//! Runtime configuration for the store system.

use tracing::warn;

/// Environment variable overriding [`StoreConfig::buffer_size`].
pub const BUFFER_ENV: &str = "BURGER_STORE_BUFFER";

const DEFAULT_BUFFER_SIZE: usize = 32;

/// Settings shared by every store actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Capacity of each store's action channel. When full, dispatchers wait.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl StoreConfig {
    /// Reads overrides from the environment, keeping defaults for anything
    /// missing or malformed.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(BUFFER_ENV) {
            match parse_buffer_size(&raw) {
                Some(size) => config.buffer_size = size,
                None => warn!(var = BUFFER_ENV, value = %raw, "Ignoring invalid buffer size"),
            }
        }
        config
    }

    /// Set the channel capacity. Zero is bumped to one.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }
}

fn parse_buffer_size(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|size| *size > 0)
}

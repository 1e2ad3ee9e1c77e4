//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GROCER_CHECKOUT_DELAY_MS=0                                         │
//! │     GROCER_PRODUCTS_PATH=/srv/grocer/products.json                     │
//! │     GROCER_POISON_ID / GROCER_BAD_ID                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.grocer.storefront/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     500 ms checkout delay, embedded catalog, "poison" / "bad"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [backend]
//! checkout_delay_ms = 500
//! products_path = "/srv/grocer/products.json"
//! poison_id = "poison"
//! bad_id = "bad"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use grocer_api::mock::{DEFAULT_BAD_ID, DEFAULT_LATENCY, DEFAULT_POISON_ID};
use grocer_api::MockConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Backend Settings
// =============================================================================

/// How the mock backend behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Delay before every checkout answer (milliseconds).
    #[serde(default = "default_checkout_delay")]
    pub checkout_delay_ms: u64,

    /// Catalog file served instead of the embedded one.
    #[serde(default)]
    pub products_path: Option<PathBuf>,

    /// Product id that makes checkout fail without a message.
    #[serde(default = "default_poison_id")]
    pub poison_id: String,

    /// Product id that makes checkout come back declined.
    #[serde(default = "default_bad_id")]
    pub bad_id: String,
}

fn default_checkout_delay() -> u64 {
    DEFAULT_LATENCY.as_millis() as u64
}

fn default_poison_id() -> String {
    DEFAULT_POISON_ID.to_string()
}

fn default_bad_id() -> String {
    DEFAULT_BAD_ID.to_string()
}

impl Default for BackendSettings {
    fn default() -> Self {
        BackendSettings {
            checkout_delay_ms: default_checkout_delay(),
            products_path: None,
            poison_id: default_poison_id(),
            bad_id: default_bad_id(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_path.or_else(Self::default_config_path), |key| {
            std::env::var(key).ok()
        })
    }

    fn load_with(
        path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        let backend = &self.backend;

        if backend.poison_id.trim().is_empty() {
            return Err(AppError::InvalidConfig("poison_id must not be empty".into()));
        }

        if backend.bad_id.trim().is_empty() {
            return Err(AppError::InvalidConfig("bad_id must not be empty".into()));
        }

        if backend.poison_id == backend.bad_id {
            return Err(AppError::InvalidConfig(format!(
                "poison_id and bad_id must differ, both are '{}'",
                backend.poison_id
            )));
        }

        Ok(())
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(delay) = lookup("GROCER_CHECKOUT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => {
                    debug!(ms, "Overriding checkout delay from environment");
                    self.backend.checkout_delay_ms = ms;
                }
                Err(_) => warn!(value = %delay, "Ignoring unparsable GROCER_CHECKOUT_DELAY_MS"),
            }
        }

        if let Some(path) = lookup("GROCER_PRODUCTS_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.backend.products_path = Some(PathBuf::from(path));
        }

        if let Some(id) = lookup("GROCER_POISON_ID") {
            self.backend.poison_id = id;
        }

        if let Some(id) = lookup("GROCER_BAD_ID") {
            self.backend.bad_id = id;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grocer", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Settings for [`grocer_api::MockBackend`].
    pub fn mock_config(&self) -> MockConfig {
        let backend = &self.backend;
        MockConfig {
            latency: Duration::from_millis(backend.checkout_delay_ms),
            poison_id: backend.poison_id.clone(),
            bad_id: backend.bad_id.clone(),
            products_path: backend.products_path.clone(),
            offline: false,
        }
    }
}

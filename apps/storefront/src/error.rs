//! # App Error Type
//!
//! Errors that can stop the storefront shell.
//!
//! Checkout failures are NOT here: they are folded into cart state by
//! [`crate::state::checkout_cart`] and rendered, never propagated.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup ──► AppConfig::load ──► ConfigParse / InvalidConfig / Io      │
//! │          ──► load_products   ──► Api                                   │
//! │  shell   ──► stdin/stdout    ──► Io                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocer_api::ApiError;
use thiserror::Error;

/// Result type alias for the storefront.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML for [`crate::state::AppConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A backend call the shell cannot continue without failed.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// View payload could not be encoded.
    #[error("Failed to encode view: {0}")]
    Encode(#[from] serde_json::Error),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

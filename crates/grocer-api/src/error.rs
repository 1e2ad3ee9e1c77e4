//! # API Error Types
//!
//! Error types for calls to the backend.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend call fails                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module)                                                 │
//! │       │                                                                 │
//! │       ├── checkout ──► failure_message() ──► CheckoutRejected(msg)     │
//! │       │                (absorbed into cart state, never re-thrown)     │
//! │       │                                                                 │
//! │       └── fetch_products ──► AppError (storefront startup)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocer_core::CoreError;
use thiserror::Error;

/// Result type alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend call failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend refused the request.
    ///
    /// ## When This Occurs
    /// - Checkout with an empty cart ("Must include cart items")
    /// - Checkout containing the poison product (no message)
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Transport(String),

    /// A response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A fixture file could not be read.
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog contained a record that is not a usable product.
    #[error(transparent)]
    InvalidProduct(#[from] CoreError),
}

impl ApiError {
    /// The message folded into cart state when a checkout fails.
    ///
    /// A rejection carries the backend's own message, or nothing at all; every
    /// other failure reports its description.
    pub fn failure_message(&self) -> String {
        match self {
            ApiError::Rejected { message } => message.clone().unwrap_or_default(),
            other => other.to_string(),
        }
    }
}

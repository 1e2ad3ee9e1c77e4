//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - Unusable product records from the backend      │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  grocer-api errors (separate crate)                                    │
//! │  └── ApiError         - Backend failures (folded into cart state)      │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── AppError         - Startup / config / terminal I/O                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers and selectors never return errors. Bad quantity input is coerced
//! at the boundary (see [`crate::validation::parse_quantity`]).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors raised while turning external data into domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product record from the backend is unusable.
    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        id: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

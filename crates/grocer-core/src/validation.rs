//! # Validation Module
//!
//! Input coercion and record validation at the edges of the state layer.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Quantity text box ──► parse_quantity() ──► UpdateQuantity(id, n)      │
//! │                        (never fails: bad text becomes 0)               │
//! │                                                                         │
//! │  Catalog fixture ────► validate_product() ──► Received(products)       │
//! │                        (malformed records rejected by the backend)     │
//! │                                                                         │
//! │  Reducers ───────────► no validation at all                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity Input
// =============================================================================

/// Parses free-text quantity input into a non-negative integer.
///
/// ## Rules
/// - Leading whitespace is skipped
/// - The leading run of ASCII digits is parsed; trailing text is ignored
/// - No digits, a minus sign, or overflow → 0
///
/// ## Example
/// ```rust
/// use grocer_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("4"), 4);
/// assert_eq!(parse_quantity(" 12 "), 12);
/// assert_eq!(parse_quantity("3 boxes"), 3);
/// assert_eq!(parse_quantity(""), 0);
/// assert_eq!(parse_quantity("abc"), 0);
/// assert_eq!(parse_quantity("-2"), 0);
/// ```
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end].parse::<i64>().unwrap_or(0)
}

// =============================================================================
// Product Records
// =============================================================================

/// Validates a product record received from the backend.
///
/// ## Rules
/// - `id` must not be blank
/// - `name` must not be blank
/// - `price` must not be negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if product.price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Core domain types shared by the reducers, the backend and the view.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartItems     │   │ CheckoutState   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id → quantity  │   │  READY          │       │
//! │  │  name           │   │                 │   │  LOADING        │       │
//! │  │  price (Money)  │   └─────────────────┘   │  ERROR          │       │
//! │  │  image*         │                         └─────────────────┘       │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │                        │CheckoutResponse │                              │
//! │  Catalog: id → Product │  success, error │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Product identifier as it appears in the catalog fixture.
pub type ProductId = String;

/// Cart contents: product id → quantity.
///
/// A quantity of 0 may stay in the map; it contributes nothing to totals.
pub type CartItems = HashMap<ProductId, i64>;

/// Every known product, keyed by id.
pub type Catalog = HashMap<ProductId, Product>;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Created by the backend, stored once, never mutated. Field names follow the
/// catalog fixture (`imageURL`, `imageAlt`, `imageCredit`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    /// Unit price. Decimal number on the wire, cents in memory.
    #[serde(with = "crate::money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "imageURL", default)]
    pub image_url: String,

    #[serde(rename = "imageAlt", default)]
    pub image_alt: String,

    #[serde(rename = "imageCredit", default)]
    pub image_credit: String,
}

impl Product {
    /// Builds a product with only the fields the cart math cares about.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image_url: String::new(),
            image_alt: String::new(),
            image_credit: String::new(),
        }
    }
}

// =============================================================================
// Checkout State
// =============================================================================

/// Where the cart is in its checkout lifecycle.
///
/// ```text
///  READY ──(pending)──► LOADING ──(success)──────────► READY (items cleared)
///                          │
///                          └──(success=false | failure)──► ERROR (items kept)
///  ERROR ──(pending)──► LOADING
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    #[default]
    Ready,
    Loading,
    Error,
}

impl CheckoutState {
    /// Wire name, as the view matches on it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Ready => "READY",
            CheckoutState::Loading => "LOADING",
            CheckoutState::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Checkout Response
// =============================================================================

/// Payload the checkout endpoint resolves with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

impl CheckoutResponse {
    pub fn succeeded() -> Self {
        CheckoutResponse {
            success: true,
            error: None,
        }
    }

    pub fn declined() -> Self {
        CheckoutResponse {
            success: false,
            error: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

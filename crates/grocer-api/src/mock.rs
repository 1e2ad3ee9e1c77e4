//! # Mock Backend
//!
//! A stand-in for the shop's HTTP API, answering from embedded JSON fixtures.
//!
//! ## Checkout Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    MockBackend::checkout(items)                         │
//! │                                                                         │
//! │  wait `latency` (500 ms by default)                                     │
//! │       │                                                                 │
//! │       ├── offline?                 → Err(Transport)                     │
//! │       ├── items empty?             → checkout-error.json                │
//! │       │                              {success:false, error:"Must       │
//! │       │                               include cart items"}             │
//! │       │                              → Err(Rejected(Some(msg)))        │
//! │       ├── poison id with qty > 0?  → Err(Rejected(None))                │
//! │       ├── bad id with qty > 0?     → Ok({success:false})                │
//! │       └── otherwise                → checkout-success.json              │
//! │                                      → Ok({success:true})              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use grocer_core::validation::validate_product;
use grocer_core::{CartItems, CheckoutResponse, CoreError, Product};
use tracing::debug;

use crate::backend::ShopBackend;
use crate::error::{ApiError, ApiResult};

const PRODUCTS_FIXTURE: &str = include_str!("fixtures/products.json");
const CHECKOUT_SUCCESS_FIXTURE: &str = include_str!("fixtures/checkout-success.json");
const CHECKOUT_ERROR_FIXTURE: &str = include_str!("fixtures/checkout-error.json");

/// Simulated response delay of the checkout endpoint.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Product id whose presence makes checkout fail without a message.
pub const DEFAULT_POISON_ID: &str = "poison";

/// Product id whose presence makes checkout resolve with `success: false`.
pub const DEFAULT_BAD_ID: &str = "bad";

// =============================================================================
// Configuration
// =============================================================================

/// Mock backend settings.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Delay before every checkout answer.
    pub latency: Duration,

    /// Id that triggers a message-less failure.
    pub poison_id: String,

    /// Id that triggers a `success: false` answer.
    pub bad_id: String,

    /// Catalog file to serve instead of the embedded fixture.
    pub products_path: Option<PathBuf>,

    /// Fail every call as if the network were down.
    pub offline: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        MockConfig {
            latency: DEFAULT_LATENCY,
            poison_id: DEFAULT_POISON_ID.to_string(),
            bad_id: DEFAULT_BAD_ID.to_string(),
            products_path: None,
            offline: false,
        }
    }
}

impl MockConfig {
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn products_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.products_path = Some(path.into());
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }
}

// =============================================================================
// Catalog Decoding
// =============================================================================

/// Decodes a catalog document and validates every record.
pub fn decode_catalog(json: &str) -> ApiResult<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    for product in &products {
        validate_product(product).map_err(|source| CoreError::InvalidProduct {
            id: product.id.clone(),
            source,
        })?;
    }

    Ok(products)
}

/// Turns a declined response that carries an error message into a failure.
///
/// This is how the empty-cart fixture surfaces as a rejection while a bare
/// `{success: false}` stays a resolved decline.
fn settle(response: CheckoutResponse) -> ApiResult<CheckoutResponse> {
    match response {
        CheckoutResponse {
            success: false,
            error: Some(message),
        } => Err(ApiError::Rejected {
            message: Some(message),
        }),
        response => Ok(response),
    }
}

// =============================================================================
// Mock Backend
// =============================================================================

/// Fixture-backed [`ShopBackend`].
#[derive(Debug)]
pub struct MockBackend {
    config: MockConfig,
    orders: Mutex<Vec<CartItems>>,
}

impl MockBackend {
    pub fn new(config: MockConfig) -> Self {
        MockBackend {
            config,
            orders: Mutex::new(Vec::new()),
        }
    }

    /// A backend that answers without any delay.
    pub fn instant() -> Self {
        Self::new(MockConfig::default().latency(Duration::ZERO))
    }

    /// Every checkout payload received so far, oldest first.
    pub fn received_orders(&self) -> Vec<CartItems> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn contains(items: &CartItems, id: &str) -> bool {
        items.get(id).is_some_and(|quantity| *quantity > 0)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl ShopBackend for MockBackend {
    async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        if self.config.offline {
            return Err(ApiError::Transport("catalog unreachable".to_string()));
        }

        let products = match &self.config.products_path {
            Some(path) => {
                debug!(?path, "Loading catalog from file");
                let contents = tokio::fs::read_to_string(path).await?;
                decode_catalog(&contents)?
            }
            None => decode_catalog(PRODUCTS_FIXTURE)?,
        };

        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }

    async fn checkout(&self, items: CartItems) -> ApiResult<CheckoutResponse> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(items.clone());

        tokio::time::sleep(self.config.latency).await;

        if self.config.offline {
            return Err(ApiError::Transport("checkout unreachable".to_string()));
        }

        if items.is_empty() {
            debug!("Checkout submitted with an empty cart");
            return settle(serde_json::from_str(CHECKOUT_ERROR_FIXTURE)?);
        }

        if Self::contains(&items, &self.config.poison_id) {
            debug!(id = %self.config.poison_id, "Checkout contains poison product");
            return Err(ApiError::Rejected { message: None });
        }

        if Self::contains(&items, &self.config.bad_id) {
            debug!(id = %self.config.bad_id, "Checkout declined");
            return Ok(CheckoutResponse::declined());
        }

        settle(serde_json::from_str(CHECKOUT_SUCCESS_FIXTURE)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

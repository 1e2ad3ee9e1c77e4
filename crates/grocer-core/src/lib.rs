//! # grocer-core: Pure State for the Grocer Storefront
//!
//! This crate is the **heart** of Grocer. It holds the application model and
//! every transition of it as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View (storefront commands)                   │   │
//! │  │    Product list ──► Cart table ──► Checkout button              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch / select                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Store (storefront::state)                    │   │
//! │  │    holds RootState, runs checkout orchestration                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ products  │  │ selectors │  │   │
//! │  │   │  Product  │  │  reducer  │  │  reducer  │  │  memoized │  │   │
//! │  │   │   Money   │  │  actions  │  │  catalog  │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO ASYNC • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItems, CheckoutState, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart slice and its reducer
//! - [`products`] - Catalog slice and its reducer
//! - [`root`] - Combined state and action routing
//! - [`selectors`] - Derived values with identity-keyed memoization
//! - [`validation`] - Boundary coercion and record checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use grocer_core::cart::CartState;
//! use grocer_core::selectors::total_item_count;
//!
//! let cart = CartState::new()
//!     .add_to_cart("207")
//!     .add_to_cart("207")
//!     .update_quantity("101", 3);
//!
//! assert_eq!(total_item_count(&cart.items), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod products;
pub mod root;
pub mod selectors;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartState};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use products::{ProductsAction, ProductsState};
pub use root::{RootAction, RootState};
pub use selectors::Selectors;
pub use types::*;

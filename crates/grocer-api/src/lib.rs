//! # grocer-api: Backend Collaborators for Grocer
//!
//! This crate owns every call the storefront makes outside its own process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer Data Flow                                 │
//! │                                                                         │
//! │  Storefront (load_products / checkout_cart)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     grocer-api (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  ShopBackend  │    │  MockBackend  │    │   Fixtures   │  │   │
//! │  │   │  (trait)      │◄───│  latency,     │───►│ products.json│  │   │
//! │  │   │               │    │  poison/bad   │    │ checkout-*.  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grocer_api::{MockBackend, ShopBackend};
//!
//! let backend = MockBackend::default();
//! let products = backend.fetch_products().await?;
//! let response = backend.checkout(items).await?;
//! ```

pub mod backend;
pub mod error;
pub mod mock;

pub use backend::ShopBackend;
pub use error::{ApiError, ApiResult};
pub use mock::{MockBackend, MockConfig};

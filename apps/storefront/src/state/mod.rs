//! # Application State
//!
//! The store container, checkout orchestration and configuration.

pub mod checkout;
pub mod config;
pub mod store;

pub use checkout::{checkout_cart, CheckoutEvent, CheckoutPhase};
pub use config::{AppConfig, BackendSettings};
pub use store::Store;

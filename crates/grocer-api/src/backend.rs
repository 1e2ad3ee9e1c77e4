//! # Backend Trait
//!
//! The two calls the storefront makes to the outside world.

use std::future::Future;

use grocer_core::{CartItems, CheckoutResponse, Product};

use crate::error::ApiResult;

/// Product fetch and checkout.
///
/// ## Contract
/// - `fetch_products` resolves to the catalog in fixture order.
/// - `checkout` resolves to `{success, error?}` or fails with an [`ApiError`].
///   A resolved `success: false` is a business decline, not a failure.
///
/// [`ApiError`]: crate::error::ApiError
pub trait ShopBackend: Send + Sync {
    fn fetch_products(&self) -> impl Future<Output = ApiResult<Vec<Product>>> + Send;

    fn checkout(&self, items: CartItems) -> impl Future<Output = ApiResult<CheckoutResponse>> + Send;
}

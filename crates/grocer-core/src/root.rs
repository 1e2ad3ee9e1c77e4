//! # Root State
//!
//! Combines the cart and products slices into the single state object the
//! store holds, and routes actions to the slice that owns them.

use crate::cart::{self, CartAction, CartState};
use crate::products::{self, ProductsAction, ProductsState};
use crate::types::{CartItems, Catalog};

/// The whole application model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub cart: CartState,
    pub products: ProductsState,
}

/// An action for either slice.
#[derive(Debug, Clone, PartialEq)]
pub enum RootAction {
    Cart(CartAction),
    Products(ProductsAction),
}

impl From<CartAction> for RootAction {
    fn from(action: CartAction) -> Self {
        RootAction::Cart(action)
    }
}

impl From<ProductsAction> for RootAction {
    fn from(action: ProductsAction) -> Self {
        RootAction::Products(action)
    }
}

impl RootState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `READY` state holding `items` and `catalog`.
    pub fn with_items(items: CartItems, catalog: Catalog) -> Self {
        RootState {
            cart: CartState::with_items(items),
            products: ProductsState::with_catalog(catalog),
        }
    }
}

/// Applies `action` to the slice that owns it. The other slice is shared as is.
pub fn reduce(state: &RootState, action: RootAction) -> RootState {
    match action {
        RootAction::Cart(action) => RootState {
            cart: cart::reduce(&state.cart, action),
            products: state.products.clone(),
        },
        RootAction::Products(action) => RootState {
            cart: state.cart.clone(),
            products: products::reduce(&state.products, action),
        },
    }
}

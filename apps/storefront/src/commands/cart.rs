//! # Cart Commands
//!
//! View bindings for the shopping cart page and the header cart link.
//!
//! ## Cart Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopping Cart                                                          │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Product       Quantity     Price       Total       Remove     │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  carrots       [ 2 ]        $5.50       $11.00      [X]        │    │
//! │  │  bunnies       [ 3 ]        $20.00      $60.00      [X]        │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Total                                  $71.00                 │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  (error box, only when ERROR and a message exists)                     │
//! │  [Checkout]                                                             │
//! │                                                                         │
//! │  blur quantity box ──► update_quantity_from_input(id, text)            │
//! │  click X           ──► remove_from_cart(id)                            │
//! │  submit            ──► checkout(store, backend)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocer_api::ShopBackend;
use grocer_core::selectors::line_total;
use grocer_core::validation::parse_quantity;
use grocer_core::{CartAction, CheckoutState, RootState};
use serde::Serialize;
use tracing::debug;

use crate::state::{checkout_cart, CheckoutPhase, Store};

/// One line of the cart table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    /// Unit price with currency symbol.
    pub unit_price: String,
    /// `unit_price × quantity` with currency symbol.
    pub line_total: String,
    /// Accessible label of the remove button.
    pub remove_label: String,
}

/// Everything the cart page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Footer total with currency symbol, e.g. `$43.23`.
    pub total: String,
    pub checkout_state: CheckoutState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl CartView {
    fn build(state: &RootState, total: String) -> Self {
        let cart = &state.cart;

        let mut rows: Vec<CartRow> = cart
            .items
            .iter()
            .filter_map(|(id, quantity)| {
                let product = state.products.get(id)?;
                Some(CartRow {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    quantity: *quantity,
                    unit_price: product.price.to_string(),
                    line_total: line_total(product, *quantity).to_string(),
                    remove_label: format!("Remove {} from Shopping Cart", product.name),
                })
            })
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));

        let error_msg = (cart.checkout_state == CheckoutState::Error && !cart.error_msg.is_empty())
            .then(|| cart.error_msg.clone());

        CartView {
            rows,
            total: format!("${total}"),
            checkout_state: cart.checkout_state,
            error_msg,
        }
    }
}

/// Gets the cart page model.
///
/// Lines whose product is not in the catalog are skipped, but still count
/// toward the cart link. Rows and total come from the same snapshot.
pub fn cart_view(store: &Store) -> CartView {
    debug!("cart_view command");
    store.with_state(|state| {
        let total = store.selectors().select_total_price(state);
        CartView::build(state, total)
    })
}

/// Text of the header cart link: the item count, or "Cart" when empty.
pub fn cart_link_label(store: &Store) -> String {
    match store.num_items() {
        0 => "Cart".to_string(),
        count => count.to_string(),
    }
}

/// Adds one unit of `product_id`.
pub fn add_to_cart(store: &Store, product_id: &str) {
    debug!(product_id = %product_id, "add_to_cart command");
    store.dispatch(CartAction::AddToCart(product_id.to_string()));
}

/// Removes the line for `product_id`.
pub fn remove_from_cart(store: &Store, product_id: &str) {
    debug!(product_id = %product_id, "remove_from_cart command");
    store.dispatch(CartAction::RemoveFromCart(product_id.to_string()));
}

/// Sets a quantity from the raw text of the quantity box.
///
/// Unparsable text counts as 0.
///
/// ## Returns
/// The quantity that was stored
pub fn update_quantity_from_input(store: &Store, product_id: &str, input: &str) -> i64 {
    let quantity = parse_quantity(input);
    debug!(product_id = %product_id, input = %input, quantity, "update_quantity command");

    store.dispatch(CartAction::UpdateQuantity {
        id: product_id.to_string(),
        quantity,
    });
    quantity
}

/// Submits the cart.
pub async fn checkout<B: ShopBackend>(store: &Store, backend: &B) -> CheckoutPhase {
    debug!("checkout command");
    checkout_cart(store, backend).await
}

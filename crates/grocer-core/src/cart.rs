//! # Cart Reducer
//!
//! The cart slice of the application state and the pure reducer that moves it
//! from one snapshot to the next.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Action                      items                 checkout_state       │
//! │  ──────                      ─────                 ──────────────       │
//! │  AddToCart(id)               items[id] += 1        (unchanged)          │
//! │  RemoveFromCart(id)          delete items[id]      (unchanged)          │
//! │  UpdateQuantity(id, n)       items[id] = n         (unchanged)          │
//! │                                                                         │
//! │  CheckoutPending             (kept)                LOADING              │
//! │  CheckoutFulfilled(ok)       cleared               READY, msg cleared   │
//! │  CheckoutFulfilled(!ok)      (kept)                ERROR, msg kept      │
//! │  CheckoutRejected(msg)       (kept)                ERROR, msg = msg     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshots, Not Mutation
//! `reduce` borrows the current state and returns a new one. The items map is
//! shared behind an [`Arc`]; an action that changes the items allocates a new
//! map, an action that does not change them hands back the same `Arc`. The
//! memoized selectors rely on that pointer identity.

use std::sync::Arc;

use crate::types::{CartItems, CheckoutResponse, CheckoutState, ProductId};

// =============================================================================
// Cart State
// =============================================================================

/// The cart slice: selected products, quantities, and checkout status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    /// Product id → quantity.
    pub items: Arc<CartItems>,

    /// Checkout lifecycle position.
    pub checkout_state: CheckoutState,

    /// Message from the last rejected checkout. Empty unless one was produced.
    pub error_msg: String,
}

/// Everything that can happen to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    UpdateQuantity { id: ProductId, quantity: i64 },
    CheckoutPending,
    CheckoutFulfilled(CheckoutResponse),
    CheckoutRejected(String),
}

impl CartState {
    /// Creates the initial cart: no items, `READY`, no message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `READY` cart holding `items`.
    pub fn with_items(items: CartItems) -> Self {
        CartState {
            items: Arc::new(items),
            ..Self::default()
        }
    }

    /// Quantity held for `id`, if the id is in the cart.
    pub fn quantity(&self, id: &str) -> Option<i64> {
        self.items.get(id).copied()
    }

    /// Checks if the cart has no entries (zero-quantity entries count).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn add_to_cart(&self, id: impl Into<ProductId>) -> Self {
        reduce(self, CartAction::AddToCart(id.into()))
    }

    #[must_use]
    pub fn remove_from_cart(&self, id: impl Into<ProductId>) -> Self {
        reduce(self, CartAction::RemoveFromCart(id.into()))
    }

    #[must_use]
    pub fn update_quantity(&self, id: impl Into<ProductId>, quantity: i64) -> Self {
        reduce(
            self,
            CartAction::UpdateQuantity {
                id: id.into(),
                quantity,
            },
        )
    }

    #[must_use]
    pub fn checkout_pending(&self) -> Self {
        reduce(self, CartAction::CheckoutPending)
    }

    #[must_use]
    pub fn checkout_fulfilled(&self, result: CheckoutResponse) -> Self {
        reduce(self, CartAction::CheckoutFulfilled(result))
    }

    #[must_use]
    pub fn checkout_rejected(&self, message: impl Into<String>) -> Self {
        reduce(self, CartAction::CheckoutRejected(message.into()))
    }

    /// Copies the items map, applies `edit`, and wraps the result in a fresh `Arc`.
    fn with_edited_items(&self, edit: impl FnOnce(&mut CartItems)) -> Self {
        let mut items = CartItems::clone(&self.items);
        edit(&mut items);
        CartState {
            items: Arc::new(items),
            ..self.clone()
        }
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies `action` to `state` and returns the next state.
///
/// Never fails and never mutates `state`.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddToCart(id) => state.with_edited_items(|items| {
            let quantity = items.entry(id).or_insert(0);
            *quantity = quantity.saturating_add(1);
        }),

        CartAction::RemoveFromCart(id) => {
            if !state.items.contains_key(&id) {
                return state.clone();
            }
            state.with_edited_items(|items| {
                items.remove(&id);
            })
        }

        CartAction::UpdateQuantity { id, quantity } => state.with_edited_items(|items| {
            items.insert(id, quantity);
        }),

        CartAction::CheckoutPending => CartState {
            checkout_state: CheckoutState::Loading,
            ..state.clone()
        },

        CartAction::CheckoutFulfilled(result) => {
            if !result.success {
                // Items stay so the user can retry; the message from an
                // earlier rejection is left as it was.
                return CartState {
                    checkout_state: CheckoutState::Error,
                    ..state.clone()
                };
            }

            CartState {
                items: Arc::new(CartItems::new()),
                checkout_state: CheckoutState::Ready,
                error_msg: String::new(),
            }
        }

        CartAction::CheckoutRejected(message) => CartState {
            checkout_state: CheckoutState::Error,
            error_msg: message,
            ..state.clone()
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, i64)]) -> CartItems {
        pairs.iter().map(|(id, q)| (id.to_string(), *q)).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert_eq!(state.checkout_state, CheckoutState::Ready);
        assert_eq!(state.error_msg, "");
    }

    #[test]
    fn test_add_to_cart() {
        let state = CartState::new().add_to_cart("abc");
        assert_eq!(*state.items, items(&[("abc", 1)]));

        let state = state.add_to_cart("abc").add_to_cart("abc");
        assert_eq!(*state.items, items(&[("abc", 3)]));
        assert_eq!(state.checkout_state, CheckoutState::Ready);
    }

    #[test]
    fn test_add_to_cart_n_times() {
        let mut state = CartState::new();
        for _ in 0..25 {
            state = state.add_to_cart("apples");
        }
        assert_eq!(state.quantity("apples"), Some(25));
    }

    #[test]
    fn test_add_to_cart_revives_zero_quantity() {
        let state = CartState::with_items(items(&[("abc", 0)])).add_to_cart("abc");
        assert_eq!(state.quantity("abc"), Some(1));
    }

    #[test]
    fn test_add_to_cart_at_max_quantity_saturates() {
        let state = CartState::new()
            .update_quantity("abc", i64::MAX)
            .add_to_cart("abc");
        assert_eq!(state.quantity("abc"), Some(i64::MAX));
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = CartState::with_items(items(&[("abc", 1)]));
        let _after = before.add_to_cart("abc").remove_from_cart("abc");
        assert_eq!(*before.items, items(&[("abc", 1)]));
    }

    #[test]
    fn test_remove_from_cart() {
        let state = CartState::with_items(items(&[("abc", 1), ("def", 3)]));
        let state = state.remove_from_cart("abc");
        assert_eq!(*state.items, items(&[("def", 3)]));
    }

    #[test]
    fn test_remove_from_cart_is_idempotent() {
        let state = CartState::with_items(items(&[("abc", 1), ("def", 3)]));
        let once = state.remove_from_cart("abc");
        let twice = once.remove_from_cart("abc");

        assert_eq!(once, twice);
        // The no-op keeps the very same map.
        assert!(Arc::ptr_eq(&once.items, &twice.items));
    }

    #[test]
    fn test_update_quantity() {
        let state = CartState::with_items(items(&[("abc", 1), ("def", 3)]));
        let state = state.update_quantity("def", 5);
        assert_eq!(*state.items, items(&[("abc", 1), ("def", 5)]));
    }

    #[test]
    fn test_update_quantity_is_idempotent_and_keeps_zero() {
        let state = CartState::with_items(items(&[("abc", 1)]));
        let once = state.update_quantity("abc", 0);
        let twice = once.update_quantity("abc", 0);

        assert_eq!(once, twice);
        assert_eq!(once.quantity("abc"), Some(0));
    }

    #[test]
    fn test_update_quantity_does_not_validate() {
        let state = CartState::new().update_quantity("abc", -4);
        assert_eq!(state.quantity("abc"), Some(-4));
    }

    #[test]
    fn test_checkout_pending() {
        let state = CartState::with_items(items(&[("abc", 2)])).checkout_pending();
        assert_eq!(state.checkout_state, CheckoutState::Loading);
        assert_eq!(state.quantity("abc"), Some(2));
    }

    #[test]
    fn test_checkout_fulfilled_success_clears_items() {
        let state = CartState::with_items(items(&[("abc", 2)]))
            .checkout_pending()
            .checkout_fulfilled(CheckoutResponse::succeeded());

        assert_eq!(state, CartState::new());
    }

    #[test]
    fn test_checkout_fulfilled_failure_keeps_items_and_message() {
        let state = CartState::with_items(items(&[("abc", 2)]))
            .checkout_pending()
            .checkout_rejected("network down")
            .checkout_pending()
            .checkout_fulfilled(CheckoutResponse::declined());

        assert_eq!(state.checkout_state, CheckoutState::Error);
        assert_eq!(state.quantity("abc"), Some(2));
        assert_eq!(state.error_msg, "network down");
    }

    #[test]
    fn test_checkout_rejected() {
        let start = CartState::with_items(items(&[("abc", 2)]));
        let state = start.checkout_pending().checkout_rejected("Must include cart items");

        assert_eq!(state.checkout_state, CheckoutState::Error);
        assert_eq!(state.error_msg, "Must include cart items");
        assert!(Arc::ptr_eq(&start.items, &state.items));
    }

    #[test]
    fn test_retry_after_error() {
        let state = CartState::with_items(items(&[("abc", 2)]))
            .checkout_pending()
            .checkout_rejected("")
            .checkout_pending();
        assert_eq!(state.checkout_state, CheckoutState::Loading);

        let state = state.checkout_fulfilled(CheckoutResponse::succeeded());
        assert_eq!(state.checkout_state, CheckoutState::Ready);
        assert!(state.is_empty());
    }
}

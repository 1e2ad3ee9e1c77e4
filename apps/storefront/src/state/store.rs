//! # Store
//!
//! The state container every consumer is handed explicitly.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  View Action              Store Call              State Change          │
//! │  ───────────              ──────────              ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ────► dispatch(AddToCart) ──► new RootState       │
//! │                                                                         │
//! │  Blur quantity box ──────► dispatch(Update...) ──► new RootState       │
//! │                                                                         │
//! │  Render cart ────────────► total_price() ───────► (read, memoized)     │
//! │                                                                         │
//! │  Re-render on change ────► subscribe() ─────────► watch::Receiver      │
//! │                                                                         │
//! │  NOTE: Every dispatch replaces the snapshot held in the watch channel. │
//! │        Readers borrow the latest snapshot; nothing is mutated in place. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global instance. Each `Store::new()` is independent, with its
//! own state, its own selector caches and its own checkout event channel.

use std::sync::Arc;

use grocer_core::root::{self, RootAction, RootState};
use grocer_core::Selectors;
use tokio::sync::{broadcast, watch};
use tracing::{debug, trace};

use super::checkout::CheckoutEvent;

/// Buffered checkout events per subscriber before the oldest are dropped.
const CHECKOUT_EVENT_CAPACITY: usize = 64;

/// Cloneable handle to one application state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<RootState>,
    selectors: Selectors,
    checkout_events: broadcast::Sender<CheckoutEvent>,
}

impl Store {
    /// Creates a store holding the initial state.
    pub fn new() -> Self {
        Self::from_state(RootState::default())
    }

    /// Creates a store seeded with `state`.
    pub fn from_state(state: RootState) -> Self {
        let (state, _) = watch::channel(state);
        let (checkout_events, _) = broadcast::channel(CHECKOUT_EVENT_CAPACITY);

        Store {
            inner: Arc::new(StoreInner {
                state,
                selectors: Selectors::new(),
                checkout_events,
            }),
        }
    }

    /// Applies `action` and publishes the resulting snapshot.
    pub fn dispatch(&self, action: impl Into<RootAction>) {
        let action = action.into();
        debug!(?action, "dispatch");

        self.inner
            .state
            .send_modify(|state| *state = root::reduce(state, action));
    }

    /// A copy of the current snapshot.
    ///
    /// Cheap: the item map and the catalog are shared `Arc`s.
    pub fn state(&self) -> RootState {
        self.inner.state.borrow().clone()
    }

    /// Executes a function with read access to the current snapshot.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let empty = store.with_state(|state| state.cart.is_empty());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RootState) -> R,
    {
        let state = self.inner.state.borrow();
        f(&state)
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.inner.state.subscribe()
    }

    /// Receiver for checkout lifecycle events published from now on.
    pub fn checkout_events(&self) -> broadcast::Receiver<CheckoutEvent> {
        self.inner.checkout_events.subscribe()
    }

    pub(crate) fn publish(&self, event: CheckoutEvent) {
        if self.inner.checkout_events.send(event).is_err() {
            trace!("No checkout listeners");
        }
    }

    /// This store's memoized selectors.
    pub fn selectors(&self) -> &Selectors {
        &self.inner.selectors
    }

    /// Total quantity across the cart (memoized).
    pub fn num_items(&self) -> i64 {
        self.with_state(|state| self.inner.selectors.select_num_items(state))
    }

    /// Cart total formatted with two decimals (memoized).
    pub fn total_price(&self) -> String {
        self.with_state(|state| self.inner.selectors.select_total_price(state))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("selectors", &self.inner.selectors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::{CartAction, Catalog, CheckoutState, Money, Product, ProductsAction};

    fn add(id: &str) -> CartAction {
        CartAction::AddToCart(id.to_string())
    }

    #[test]
    fn test_new_store_initial_state() {
        let store = Store::new();
        let state = store.state();

        assert!(state.cart.is_empty());
        assert_eq!(state.cart.checkout_state, CheckoutState::Ready);
        assert_eq!(state.cart.error_msg, "");
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_dispatch_updates_state() {
        let store = Store::new();
        store.dispatch(add("207"));
        store.dispatch(add("207"));
        store.dispatch(add("207"));

        assert_eq!(store.with_state(|s| s.cart.quantity("207")), Some(3));
        assert_eq!(store.num_items(), 3);
    }

    #[test]
    fn test_stores_are_independent() {
        let first = Store::new();
        let second = Store::new();

        first.dispatch(add("207"));

        assert_eq!(first.num_items(), 1);
        assert_eq!(second.num_items(), 0);
        assert_eq!(second.selectors().num_items.recomputations(), 1);
        assert_eq!(first.selectors().num_items.recomputations(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let handle = store.clone();

        handle.dispatch(add("101"));
        assert_eq!(store.num_items(), 1);
    }

    #[test]
    fn test_selectors_memoized_across_reads() {
        let store = Store::from_state(RootState::with_items(
            [("carrots".to_string(), 2)].into(),
            Catalog::from([(
                "carrots".to_string(),
                Product::new("carrots", "carrots", Money::from_decimal(5.5)),
            )]),
        ));

        assert_eq!(store.total_price(), "11.00");
        assert_eq!(store.total_price(), "11.00");
        assert_eq!(store.selectors().total_price.recomputations(), 1);

        // Removing an id that is not in the cart keeps the same snapshot of items.
        store.dispatch(CartAction::RemoveFromCart("ghost".to_string()));
        assert_eq!(store.total_price(), "11.00");
        assert_eq!(store.selectors().total_price.recomputations(), 1);

        store.dispatch(add("carrots"));
        assert_eq!(store.total_price(), "16.50");
        assert_eq!(store.selectors().total_price.recomputations(), 2);
    }

    #[test]
    fn test_catalog_update_recomputes_price_only() {
        let store = Store::new();
        store.dispatch(add("207"));
        assert_eq!(store.total_price(), "0.00");
        assert_eq!(store.num_items(), 1);

        store.dispatch(ProductsAction::Received(vec![Product::new(
            "207",
            "Bananas",
            Money::from_decimal(2.49),
        )]));

        assert_eq!(store.total_price(), "2.49");
        assert_eq!(store.num_items(), 1);
        assert_eq!(store.selectors().total_price.recomputations(), 2);
        assert_eq!(store.selectors().num_items.recomputations(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_notified() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.dispatch(add("207"));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().cart.quantity("207"), Some(1));
    }
}

//! # Derived Selectors
//!
//! Values computed from state on read and never stored: the cart badge count
//! and the cart total.
//!
//! ## Memoization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Memoized<K, V>                                       │
//! │                                                                         │
//! │  select(key) ──► same Arc(s) as last call? ──yes──► cached value        │
//! │                         │                                               │
//! │                         no                                              │
//! │                         ▼                                               │
//! │                  compute(key), recomputations += 1, cache (key, value)  │
//! │                                                                         │
//! │  Keys compare by POINTER, not by content. Two equal maps behind two     │
//! │  different Arcs are a miss; that is exactly when a reducer produced a   │
//! │  new snapshot.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache keeps its key `Arc`s alive, so an address can never be reused by
//! a different map while it is cached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::money::Money;
use crate::root::RootState;
use crate::types::{CartItems, Catalog, Product};

// =============================================================================
// Plain Selectors
// =============================================================================

/// Sum of all quantities in the cart, saturating at the `i64` bounds.
///
/// ```rust
/// use grocer_core::selectors::total_item_count;
/// use grocer_core::types::CartItems;
///
/// let items = CartItems::from([("a".to_string(), 3), ("b".to_string(), 3)]);
/// assert_eq!(total_item_count(&items), 6);
/// assert_eq!(total_item_count(&CartItems::new()), 0);
/// ```
pub fn total_item_count(items: &CartItems) -> i64 {
    items.values().fold(0, |total, quantity| total.saturating_add(*quantity))
}

/// Price of one cart row.
pub fn line_total(product: &Product, quantity: i64) -> Money {
    product.price.multiply_quantity(quantity)
}

/// Cart total: `price × quantity` over every cart row.
///
/// Ids missing from the catalog (unknown, or not loaded yet) contribute 0.
pub fn total_price_money(items: &CartItems, catalog: &Catalog) -> Money {
    items
        .iter()
        .filter_map(|(id, quantity)| catalog.get(id).map(|p| line_total(p, *quantity)))
        .sum()
}

/// Cart total formatted for display (`"43.23"`, `"0.00"`).
pub fn total_price(items: &CartItems, catalog: &Catalog) -> String {
    total_price_money(items, catalog).to_fixed()
}

// =============================================================================
// Memoization
// =============================================================================

/// A selector input compared by identity.
pub trait MemoKey: Clone {
    fn same_as(&self, other: &Self) -> bool;
}

impl<T> MemoKey for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<A: MemoKey, B: MemoKey> MemoKey for (A, B) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1)
    }
}

/// A single-entry cache in front of a pure function.
pub struct Memoized<K, V> {
    compute: fn(&K) -> V,
    cache: Mutex<Option<(K, V)>>,
    recomputations: AtomicUsize,
}

impl<K: MemoKey, V: Clone> Memoized<K, V> {
    pub fn new(compute: fn(&K) -> V) -> Self {
        Memoized {
            compute,
            cache: Mutex::new(None),
            recomputations: AtomicUsize::new(0),
        }
    }

    /// Returns the cached value when `key` is the cached key, else recomputes.
    pub fn select(&self, key: K) -> V {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((cached_key, value)) = cache.as_ref() {
            if cached_key.same_as(&key) {
                return value.clone();
            }
        }

        let value = (self.compute)(&key);
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        *cache = Some((key, value.clone()));
        value
    }

    /// How many times `compute` has run since creation or the last reset.
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    pub fn reset_recomputations(&self) {
        self.recomputations.store(0, Ordering::Relaxed);
    }
}

impl<K, V> std::fmt::Debug for Memoized<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("recomputations", &self.recomputations.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Store Selectors
// =============================================================================

/// The memoized selectors one store owns.
///
/// Each store gets its own instance so caches and counters never leak between
/// independent stores.
#[derive(Debug)]
pub struct Selectors {
    pub num_items: Memoized<Arc<CartItems>, i64>,
    pub total_price: Memoized<(Arc<CartItems>, Arc<Catalog>), String>,
}

impl Selectors {
    pub fn new() -> Self {
        Selectors {
            num_items: Memoized::new(count_cached_items),
            total_price: Memoized::new(price_cached_items),
        }
    }

    pub fn select_num_items(&self, state: &RootState) -> i64 {
        self.num_items.select(Arc::clone(&state.cart.items))
    }

    pub fn select_total_price(&self, state: &RootState) -> String {
        self.total_price.select((
            Arc::clone(&state.cart.items),
            Arc::clone(&state.products.products),
        ))
    }
}

fn count_cached_items(items: &Arc<CartItems>) -> i64 {
    total_item_count(items)
}

fn price_cached_items((items, catalog): &(Arc<CartItems>, Arc<Catalog>)) -> String {
    total_price(items, catalog)
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartState;
    use crate::products::ProductsState;

    fn produce() -> (Product, Product, Product) {
        (
            Product::new("p0", "Strawberries", Money::from_decimal(8.45)),
            Product::new("p1", "Blueberries", Money::from_decimal(4.47)),
            Product::new("p2", "Raspberries", Money::from_decimal(6.99)),
        )
    }

    fn state_with(items: &[(&str, i64)], products: &[&Product]) -> RootState {
        RootState::with_items(
            items.iter().map(|(id, q)| (id.to_string(), *q)).collect(),
            products.iter().map(|p| (p.id.clone(), (*p).clone())).collect(),
        )
    }

    #[test]
    fn test_total_item_count() {
        assert_eq!(total_item_count(&CartItems::new()), 0);
        let state = state_with(&[("abc", 3), ("def", 3)], &[]);
        assert_eq!(total_item_count(&state.cart.items), 6);
    }

    #[test]
    fn test_total_item_count_saturates() {
        let state = state_with(
            &[("abc", 9_000_000_000_000_000_000), ("def", 9_000_000_000_000_000_000)],
            &[],
        );
        assert_eq!(total_item_count(&state.cart.items), i64::MAX);
    }

    #[test]
    fn test_total_price_huge_quantity_saturates() {
        let (p0, p1, _) = produce();
        let state = state_with(&[("p0", 99_999_999_999_999_999), ("p1", 1)], &[&p0, &p1]);
        assert_eq!(
            total_price(&state.cart.items, &state.products.products),
            Money::from_cents(i64::MAX).to_fixed()
        );
    }

    #[test]
    fn test_total_price_empty_cart() {
        let (p0, p1, _) = produce();
        let state = state_with(&[], &[&p0, &p1]);
        assert_eq!(total_price(&state.cart.items, &state.products.products), "0.00");
        assert_eq!(total_price(&CartItems::new(), &Catalog::new()), "0.00");
    }

    #[test]
    fn test_total_price_adds_up() {
        let (p0, p1, _) = produce();
        let state = state_with(&[("p0", 3), ("p1", 4)], &[&p0, &p1]);
        // 3 × 8.45 + 4 × 4.47 = 25.35 + 17.88
        assert_eq!(total_price(&state.cart.items, &state.products.products), "43.23");
    }

    #[test]
    fn test_total_price_skips_unknown_products() {
        let carrots = Product::new("carrots", "carrots", Money::from_decimal(5.5));
        let state = state_with(&[("carrots", 2), ("ghost", 9)], &[&carrots]);
        assert_eq!(total_price(&state.cart.items, &state.products.products), "11.00");
    }

    #[test]
    fn test_total_price_ignores_zero_quantity() {
        let carrots = Product::new("carrots", "carrots", Money::from_decimal(5.5));
        let state = state_with(&[("carrots", 0)], &[&carrots]);
        assert_eq!(total_price(&state.cart.items, &state.products.products), "0.00");
    }

    #[test]
    fn test_line_total() {
        let (p0, _, _) = produce();
        assert_eq!(line_total(&p0, 2).to_fixed(), "16.90");
    }

    #[test]
    fn test_num_items_not_recomputed_for_same_state() {
        let selectors = Selectors::new();
        let state = state_with(&[("abc", 3), ("def", 3)], &[]);

        assert_eq!(selectors.select_num_items(&state), 6);
        assert_eq!(selectors.num_items.recomputations(), 1);
        assert_eq!(selectors.select_num_items(&state), 6);
        assert_eq!(selectors.num_items.recomputations(), 1);
    }

    #[test]
    fn test_num_items_recomputed_for_new_items() {
        let selectors = Selectors::new();
        let mut state = state_with(&[("abc", 3), ("def", 3)], &[]);
        selectors.select_num_items(&state);
        assert_eq!(selectors.num_items.recomputations(), 1);

        state.cart = CartState::with_items(CartItems::from([("abc".to_string(), 2)]));
        assert_eq!(selectors.select_num_items(&state), 2);
        assert_eq!(selectors.num_items.recomputations(), 2);
    }

    #[test]
    fn test_num_items_recomputed_for_equal_but_new_map() {
        let selectors = Selectors::new();
        let state = state_with(&[("abc", 3)], &[]);
        selectors.select_num_items(&state);

        let copy = state_with(&[("abc", 3)], &[]);
        assert_eq!(state.cart.items, copy.cart.items);
        selectors.select_num_items(&copy);
        assert_eq!(selectors.num_items.recomputations(), 2);
    }

    #[test]
    fn test_total_price_not_recomputed_for_same_state() {
        let selectors = Selectors::new();
        let (p0, p1, _) = produce();
        let state = state_with(&[("p0", 3), ("p1", 4)], &[&p0, &p1]);

        selectors.total_price.reset_recomputations();
        assert_eq!(selectors.select_total_price(&state), "43.23");
        assert_eq!(selectors.total_price.recomputations(), 1);
        assert_eq!(selectors.select_total_price(&state.clone()), "43.23");
        assert_eq!(selectors.total_price.recomputations(), 1);
    }

    #[test]
    fn test_total_price_recomputed_for_new_products() {
        let selectors = Selectors::new();
        let (p0, p1, p2) = produce();
        let mut state = state_with(&[("p0", 3), ("p1", 4)], &[&p0, &p1]);

        assert_eq!(selectors.select_total_price(&state), "43.23");
        assert_eq!(selectors.total_price.recomputations(), 1);

        state.products = ProductsState::new().received(vec![p0, p1, p2]);
        assert_eq!(selectors.select_total_price(&state), "43.23");
        assert_eq!(selectors.total_price.recomputations(), 2);
    }

    #[test]
    fn test_total_price_recomputed_when_cart_changes() {
        let selectors = Selectors::new();
        let (p0, p1, _) = produce();
        let mut state = state_with(&[("p0", 3), ("p1", 4)], &[&p0, &p1]);

        assert_eq!(selectors.select_total_price(&state), "43.23");
        assert_eq!(selectors.total_price.recomputations(), 1);

        state.cart = CartState::new();
        assert_eq!(selectors.select_total_price(&state), "0.00");
        assert_eq!(selectors.total_price.recomputations(), 2);
    }

    #[test]
    fn test_reset_recomputations() {
        let selectors = Selectors::new();
        let state = state_with(&[("abc", 1)], &[]);
        selectors.select_num_items(&state);
        selectors.num_items.reset_recomputations();
        assert_eq!(selectors.num_items.recomputations(), 0);

        // Reset clears the counter, not the cache.
        selectors.select_num_items(&state);
        assert_eq!(selectors.num_items.recomputations(), 0);
    }
}

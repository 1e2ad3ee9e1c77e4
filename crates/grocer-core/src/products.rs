//! # Products Reducer
//!
//! The catalog slice: every product the backend has handed us so far.
//!
//! Products arrive in batches (`Received`). Each batch is merged into the
//! catalog by id, so a repeated batch overwrites instead of duplicating and
//! partial batches accumulate.

use std::sync::Arc;

use crate::types::{Catalog, Product};

/// The products slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsState {
    /// Product id → product.
    pub products: Arc<Catalog>,
}

/// Everything that can happen to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    /// A batch of products arrived from the backend.
    Received(Vec<Product>),
}

impl ProductsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state already holding `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        ProductsState {
            products: Arc::new(catalog),
        }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products ordered by id, for listing.
    pub fn sorted(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    #[must_use]
    pub fn received(&self, products: Vec<Product>) -> Self {
        reduce(self, ProductsAction::Received(products))
    }
}

/// Applies `action` to `state` and returns the next state.
pub fn reduce(state: &ProductsState, action: ProductsAction) -> ProductsState {
    match action {
        ProductsAction::Received(products) => {
            if products.is_empty() {
                return state.clone();
            }

            let mut catalog = Catalog::clone(&state.products);
            for product in products {
                catalog.insert(product.id.clone(), product);
            }

            ProductsState {
                products: Arc::new(catalog),
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn fixture() -> Vec<Product> {
        vec![
            Product::new("101", "Carrots", Money::from_cents(550)),
            Product::new("207", "Bananas", Money::from_cents(249)),
            Product::new("310", "Bunnies", Money::from_cents(2000)),
            Product::new("412", "Lettuce", Money::from_cents(199)),
        ]
    }

    #[test]
    fn test_initial_state() {
        assert!(ProductsState::new().is_empty());
    }

    #[test]
    fn test_received_converts_list_to_catalog() {
        let products = fixture();
        let state = ProductsState::new().received(products.clone());

        assert_eq!(state.len(), products.len());
        for product in &products {
            assert_eq!(state.get(&product.id), Some(product));
        }
    }

    #[test]
    fn test_received_twice_does_not_duplicate() {
        let state = ProductsState::new().received(fixture());
        let state = state.received(fixture());
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_received_in_batches_accumulates() {
        let products = fixture();
        let state = ProductsState::new().received(products[0..2].to_vec());
        assert_eq!(state.len(), 2);

        let state = state.received(products[2..4].to_vec());
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_reinsertion_overwrites() {
        let state = ProductsState::new().received(fixture());
        let state = state.received(vec![Product::new("207", "Plantains", Money::from_cents(299))]);

        assert_eq!(state.len(), 4);
        assert_eq!(state.get("207").map(|p| p.name.as_str()), Some("Plantains"));
    }

    #[test]
    fn test_sorted_listing() {
        let state = ProductsState::new().received(fixture().into_iter().rev().collect());
        let ids: Vec<&str> = state.sorted().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "207", "310", "412"]);
    }
}

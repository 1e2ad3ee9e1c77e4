//! # Product Commands
//!
//! Catalog loading and the product listing.
//!
//! ## Listing Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront starts                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_products ──► backend.fetch_products() ──► ProductsAction::Received│
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  [img: A bunch of yellow bananas]  Photo by Mike Dorner        │    │
//! │  │  Bananas                                                       │    │
//! │  │  A bunch of bananas, just turning from green to yellow.        │    │
//! │  │  $2.49                               [Add to Cart]             │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  list_products(store) → [ProductCard, ...] sorted by id                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocer_api::ShopBackend;
use grocer_core::{Product, ProductsAction};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::state::Store;

/// One entry of the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price with currency symbol, e.g. `$2.49`.
    pub price: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub image_alt: String,
    pub image_credit: String,
    /// Accessible label of the add button.
    pub add_label: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        ProductCard {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
            image_alt: product.image_alt.clone(),
            image_credit: product.image_credit.clone(),
            add_label: format!("Add {} to cart", product.name),
        }
    }
}

/// Fetches the catalog and merges it into the store.
///
/// ## Returns
/// Number of products received
pub async fn load_products<B: ShopBackend>(store: &Store, backend: &B) -> AppResult<usize> {
    debug!("load_products command");

    let products = backend.fetch_products().await?;
    let count = products.len();
    store.dispatch(ProductsAction::Received(products));

    info!(count, "Products loaded");
    Ok(count)
}

/// Gets the product listing, ordered by id.
pub fn list_products(store: &Store) -> Vec<ProductCard> {
    debug!("list_products command");
    store.with_state(|state| {
        state
            .products
            .sorted()
            .into_iter()
            .map(ProductCard::from)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use grocer_api::{ApiError, MockBackend, MockConfig};

    #[tokio::test]
    async fn test_load_products() {
        let store = Store::new();
        let backend = MockBackend::instant();

        let count = load_products(&store, &backend).await.unwrap();

        assert_eq!(count, 8);
        assert_eq!(store.with_state(|s| s.products.len()), 8);
    }

    #[tokio::test]
    async fn test_load_twice_keeps_one_entry_per_id() {
        let store = Store::new();
        let backend = MockBackend::instant();

        load_products(&store, &backend).await.unwrap();
        load_products(&store, &backend).await.unwrap();

        assert_eq!(list_products(&store).len(), 8);
    }

    #[tokio::test]
    async fn test_load_products_offline() {
        let store = Store::new();
        let backend = MockBackend::new(MockConfig::default().offline(true));

        let err = load_products(&store, &backend).await.unwrap_err();

        assert!(matches!(err, AppError::Api(ApiError::Transport(_))));
        assert!(store.with_state(|s| s.products.is_empty()));
    }

    #[tokio::test]
    async fn test_list_products_cards() {
        let store = Store::new();
        load_products(&store, &MockBackend::instant()).await.unwrap();

        let cards = list_products(&store);
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["112", "158", "207", "245", "301", "333", "418", "502"]);

        let bananas = &cards[2];
        assert_eq!(bananas.name, "Bananas");
        assert_eq!(bananas.price, "$2.49");
        assert_eq!(bananas.add_label, "Add Bananas to cart");
        assert_eq!(bananas.image_alt, "A bunch of yellow bananas on a table");
    }

    #[test]
    fn test_card_serializes_wire_names() {
        let card = ProductCard::from(&Product::new(
            "502",
            "Lemons",
            grocer_core::Money::from_cents(89),
        ));
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["price"], "$0.89");
        assert!(json.get("imageURL").is_some());
        assert!(json.get("addLabel").is_some());
    }
}

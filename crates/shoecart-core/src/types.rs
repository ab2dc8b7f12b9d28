//! # Domain Types
//!
//! Records exchanged with the catalog API, the UI and local storage.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │     Stock       │   │     CartEntry       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │   │  ..Product fields   │   │
//! │  │  title          │   │  amount         │   │  amount (>= 1)      │   │
//! │  │  price          │   │  (ceiling)      │   │                     │   │
//! │  │  image          │   └─────────────────┘   └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! `CartEntry` flattens its product, so a persisted entry is one flat object:
//! `{ "id": 1, "title": "...", "price": 179.9, "image": "...", "amount": 2 }`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Catalog identifier of a product.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A catalog record as returned by `GET /products/{id}`.
///
/// Display and pricing fields are carried through the cart untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique catalog identifier.
    #[ts(type = "number")]
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price as served by the catalog (display only).
    pub price: f64,

    /// Image URL.
    pub image: String,
}

// =============================================================================
// Stock
// =============================================================================

/// Stock ceiling as returned by `GET /stock/{id}`.
///
/// ## Freshness
/// Never cached: every quantity-affecting operation asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    /// Product this ceiling applies to.
    #[ts(type = "number")]
    pub id: ProductId,

    /// Maximum purchasable quantity right now. May be zero or negative.
    #[ts(type = "number")]
    pub amount: i64,
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A product in the cart together with the chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    /// Product fields, flattened into the entry on the wire.
    #[serde(flatten)]
    pub product: Product,

    /// Quantity the user has chosen. Always >= 1 inside a cart.
    #[ts(type = "number")]
    pub amount: i64,
}

impl CartEntry {
    /// Creates the entry a first "add" produces.
    pub fn first(product: Product) -> Self {
        CartEntry { product, amount: 1 }
    }

    /// Product id of this entry.
    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

// =============================================================================
// Update Request
// =============================================================================

/// Payload of a quantity change coming from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateProductAmount {
    #[ts(type = "number")]
    pub product_id: ProductId,
    #[ts(type = "number")]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker() -> Product {
        Product {
            id: 3,
            title: "Tênis Adidas Duramo Lite 2.0".to_string(),
            price: 219.9,
            image: "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis3.jpg"
                .to_string(),
        }
    }

    #[test]
    fn test_cart_entry_serializes_flat() {
        let entry = CartEntry {
            product: sneaker(),
            amount: 2,
        };

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["title"], "Tênis Adidas Duramo Lite 2.0");
        assert_eq!(value["amount"], 2);
        assert!(value.get("product").is_none());
    }

    #[test]
    fn test_cart_entry_reads_storefront_snapshot() {
        let raw = r#"{"id":3,"title":"Tênis Adidas Duramo Lite 2.0","price":219.9,
            "image":"https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis3.jpg",
            "amount":4}"#;

        let entry: CartEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(entry.product, sneaker());
        assert_eq!(entry.amount, 4);
        assert_eq!(entry.id(), 3);
    }

    #[test]
    fn test_update_request_is_camel_case() {
        let req: UpdateProductAmount =
            serde_json::from_str(r#"{"productId":7,"amount":3}"#).unwrap();
        assert_eq!(
            req,
            UpdateProductAmount {
                product_id: 7,
                amount: 3
            }
        );
    }

    #[test]
    fn test_stock_allows_negative_amount() {
        let stock: Stock = serde_json::from_str(r#"{"id":1,"amount":-2}"#).unwrap();
        assert_eq!(stock.amount, -2);
    }
}

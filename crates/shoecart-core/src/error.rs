//! # Error Types
//!
//! Domain error types for shoecart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoecart-core errors (this file)                                      │
//! │  └── CartError        - Why a cart operation did not complete          │
//! │                                                                         │
//! │  shoecart-store errors (separate crate)                                │
//! │  ├── CatalogError     - Stock/product lookup failures                  │
//! │  ├── StorageError     - Opening the on-disk store                      │
//! │  └── ConfigError      - Loading configuration                          │
//! │                                                                         │
//! │  Flow: CatalogError → CartError → Notice → Notifier → User             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. A `CartError` never reaches the UI as-is: it is folded into a
//!    [`Notice`](crate::Notice) first

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Cart Error
// =============================================================================

/// Reasons a cart operation stopped before committing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested or incremented quantity would pass the stock ceiling.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart has 3 × product 2, user clicks "add"
    ///      │
    ///      ▼
    /// GET /stock/2 → { amount: 3 }
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 2, requested: 4, available: 3 }
    ///      │
    ///      ▼
    /// UI shows: "Quantidade solicitada fora de estoque"
    /// ```
    #[error("Product {product_id} out of stock: available {available}, requested {requested}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// The product has no entry in the cart.
    #[error("Product {0} not in cart")]
    NotInCart(ProductId),

    /// The stock or product lookup failed (network, not found, bad body).
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The new cart could not be encoded for storage.
    #[error("Failed to encode cart: {0}")]
    Serialization(String),
}

impl CartError {
    /// Returns true when the failure is the stock ceiling rather than a fault.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::OutOfStock {
            product_id: 2,
            requested: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Product 2 out of stock: available 3, requested 4"
        );
        assert_eq!(CartError::NotInCart(9).to_string(), "Product 9 not in cart");
    }

    #[test]
    fn test_is_out_of_stock() {
        let err = CartError::OutOfStock {
            product_id: 1,
            requested: 1,
            available: 0,
        };
        assert!(err.is_out_of_stock());
        assert!(!CartError::NotInCart(1).is_out_of_stock());
        assert!(!CartError::Lookup("timeout".to_string()).is_out_of_stock());
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: CartError = json_err.into();
        assert!(matches!(err, CartError::Serialization(_)));
    }
}

//! # Validation Module
//!
//! Stock ceiling rules applied before a cart change is committed.
//!
//! ## Where the Rules Apply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quantity Checks                                    │
//! │                                                                         │
//! │  add(id)                                                               │
//! │  ├── current = existing amount, or 0 when not in cart                  │
//! │  └── check_increment: current >= stock? → OutOfStock                   │
//! │                                                                         │
//! │  update_amount(id, n)                                                  │
//! │  ├── is_settable_amount: n <= 0? → silently ignored                    │
//! │  └── check_requested_amount: n > stock? → OutOfStock                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoecart_core::validation::check_increment;
//! use shoecart_core::Stock;
//!
//! let stock = Stock { id: 1, amount: 3 };
//! assert!(check_increment(1, Some(2), &stock).is_ok());
//! assert!(check_increment(1, Some(3), &stock).is_err());
//! ```

use crate::error::{CartError, CartResult};
use crate::types::{ProductId, Stock};

/// Checks that one more unit of a product fits under its stock ceiling.
///
/// ## Rules
/// - `existing` is the amount already in the cart, `None` when absent
/// - An absent product counts as 0, so it is only blocked when the
///   reported stock is zero or negative
pub fn check_increment(
    product_id: ProductId,
    existing: Option<i64>,
    stock: &Stock,
) -> CartResult<()> {
    let current = existing.unwrap_or(0);

    if current >= stock.amount {
        return Err(CartError::OutOfStock {
            product_id,
            requested: current.saturating_add(1),
            available: stock.amount,
        });
    }

    Ok(())
}

/// Checks that an explicitly requested quantity does not exceed the ceiling.
pub fn check_requested_amount(
    product_id: ProductId,
    requested: i64,
    stock: &Stock,
) -> CartResult<()> {
    if requested > stock.amount {
        return Err(CartError::OutOfStock {
            product_id,
            requested,
            available: stock.amount,
        });
    }

    Ok(())
}

/// Whether a quantity from the UI should be acted on at all.
///
/// Zero and negative values are not errors, they are ignored without a notice.
#[inline]
pub const fn is_settable_amount(amount: i64) -> bool {
    amount > 0
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Cart
//!
//! The ordered list of cart entries and the transforms that produce the next
//! version of it.
//!
//! ## Copy-on-Write
//! Every transform borrows the current cart and returns a new one. The store
//! only swaps the new value in after it has been persisted, so a failed
//! operation never leaves a half-edited cart behind.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transforms                                      │
//! │                                                                         │
//! │  UI Action               Transform                Result                │
//! │  ─────────               ─────────                ──────                │
//! │                                                                         │
//! │  Click "add" ──────────► added(product) ────────► amount + 1 or push   │
//! │                                                                         │
//! │  Change quantity ──────► with_amount(id, n) ────► entry.amount = n     │
//! │                                                                         │
//! │  Click remove ─────────► without(id) ───────────► entry dropped        │
//! │                                                                         │
//! │  NOTE: Order is insertion order. Updates never move an entry.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::types::{CartEntry, Product, ProductId};

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by product id (adding the same product bumps its amount)
/// - Entries keep insertion order
/// - Every amount is at least 1
///
/// ## Serialization
/// Serialized as a bare JSON array of entries, the persisted snapshot format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Builds a cart from entries, keeping the first entry for each product id.
    ///
    /// Entries with an amount below 1 are dropped.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut unique: Vec<CartEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.amount < 1 {
                continue;
            }
            if !unique.iter().any(|e| e.id() == entry.id()) {
                unique.push(entry);
            }
        }
        Cart { entries: unique }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Consumes the cart, returning its entries.
    pub fn into_entries(self) -> Vec<CartEntry> {
        self.entries
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    /// Finds the entry for a product.
    pub fn find(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == product_id)
    }

    /// Checks whether a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    /// Amount chosen for a product, if it is in the cart.
    pub fn amount_of(&self, product_id: ProductId) -> Option<i64> {
        self.find(product_id).map(|e| e.amount)
    }

    /// Returns the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total quantity of all entries, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.entries
            .iter()
            .fold(0_i64, |total, e| total.saturating_add(e.amount))
    }

    /// Amount per product id, for badges next to catalog items.
    pub fn amounts_by_product(&self) -> BTreeMap<ProductId, i64> {
        self.entries.iter().map(|e| (e.id(), e.amount)).collect()
    }

    // -------------------------------------------------------------------------
    // Transforms
    // -------------------------------------------------------------------------

    /// Returns the cart with one more unit of `product`.
    ///
    /// ## Behavior
    /// - Already in cart: that entry's amount goes up by one; its stored
    ///   product fields are kept as they were
    /// - Not in cart: a new entry with amount 1 is appended
    pub fn added(&self, product: Product) -> Cart {
        if self.contains(product.id) {
            let entries = self
                .entries
                .iter()
                .map(|e| {
                    if e.id() == product.id {
                        CartEntry {
                            amount: e.amount.saturating_add(1),
                            ..e.clone()
                        }
                    } else {
                        e.clone()
                    }
                })
                .collect();
            return Cart { entries };
        }

        let mut entries = self.entries.clone();
        entries.push(CartEntry::first(product));
        Cart { entries }
    }

    /// Returns the cart with `product_id`'s amount set to `amount`.
    ///
    /// ## Returns
    /// - `Err(CartError::NotInCart)` if the product has no entry
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> CartResult<Cart> {
        if !self.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }

        let entries = self
            .entries
            .iter()
            .map(|e| {
                if e.id() == product_id {
                    CartEntry {
                        amount,
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect();

        Ok(Cart { entries })
    }

    /// Returns the cart without `product_id`'s entry.
    ///
    /// ## Returns
    /// - `Err(CartError::NotInCart)` if the product has no entry
    pub fn without(&self, product_id: ProductId) -> CartResult<Cart> {
        let entries: Vec<CartEntry> = self
            .entries
            .iter()
            .filter(|e| e.id() != product_id)
            .cloned()
            .collect();

        if entries.len() == self.entries.len() {
            return Err(CartError::NotInCart(product_id));
        }

        Ok(Cart { entries })
    }
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        Cart::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

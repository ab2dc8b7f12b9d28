//! # shoecart-core: Pure Cart Logic for ShoeCart
//!
//! This crate holds the cart data model and every rule that decides how the
//! cart changes. It has zero I/O dependencies: lookups, storage and user
//! notifications live in `shoecart-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShoeCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI (CLI / web view)                          │   │
//! │  │    Product grid ──► Cart page ──► Quantity stepper              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add / remove / update_amount           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               shoecart-store (CartStore)                        │   │
//! │  │    stock lookups, commit to storage, notices                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoecart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ validation│  │  notice   │  │   │
//! │  │   │  Product  │  │   Cart    │  │  stock    │  │  toasts   │  │   │
//! │  │   │  Stock    │  │ transforms│  │  ceiling  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog and cart records (Product, Stock, CartEntry)
//! - [`cart`] - The ordered cart and its copy-on-write transforms
//! - [`validation`] - Stock ceiling rules
//! - [`notice`] - The four user-facing messages
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shoecart_core::{Cart, Product};
//!
//! let sneaker = Product {
//!     id: 1,
//!     title: "Tênis de Caminhada".to_string(),
//!     price: 179.9,
//!     image: "https://example.com/1.jpg".to_string(),
//! };
//!
//! let cart = Cart::new().added(sneaker.clone());
//! let cart = cart.added(sneaker);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.amount_of(1), Some(2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod notice;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CartError, CartResult};
pub use notice::{CartOperation, Notice};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart snapshot is persisted under.
///
/// Kept identical to the key the web storefront used so carts saved by
/// earlier clients still hydrate.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

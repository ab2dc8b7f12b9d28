//! # Cart Commands
//!
//! Subcommands mapped onto the cart store, and the view printed afterwards.
//!
//! ## Command Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shoecart show              ──► store.entries()                         │
//! │  shoecart add 3             ──► store.add(3)                            │
//! │  shoecart remove 3          ──► store.remove(3)                         │
//! │  shoecart update 3 2        ──► store.update_amount({ 3, 2 })           │
//! │                                                                         │
//! │  Every command ends by printing the cart (text or --json).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use clap::Subcommand;
use serde::Serialize;
use shoecart_core::{Cart, CartEntry, ProductId, UpdateProductAmount};
use shoecart_store::CartStore;
use tracing::debug;

/// A cart action requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the cart
    Show,

    /// Add one unit of a product
    Add {
        /// Catalog id of the product
        product_id: ProductId,
    },

    /// Remove a product from the cart
    Remove {
        /// Catalog id of the product
        product_id: ProductId,
    },

    /// Set the amount of a product already in the cart
    Update {
        /// Catalog id of the product
        product_id: ProductId,

        /// New amount (0 or less is ignored)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

/// Runs one command against the store.
pub async fn execute(store: &CartStore, command: Command) {
    debug!(?command, "executing command");

    match command {
        Command::Show => {}
        Command::Add { product_id } => store.add(product_id).await,
        Command::Remove { product_id } => store.remove(product_id),
        Command::Update { product_id, amount } => {
            store
                .update_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    }
}

/// What the CLI prints after a command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub entries: Vec<CartEntry>,
    pub item_count: usize,
    pub total_quantity: i64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            entries: cart.entries().to_vec(),
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
        }
    }
}

impl CartView {
    /// Plain-text listing, one line per entry.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "Cart is empty".to_string();
        }

        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{:>4}  x{:<3} {}",
                entry.id(),
                entry.amount,
                entry.product.title
            );
        }
        let _ = write!(
            out,
            "{} product(s), {} item(s)",
            self.item_count, self.total_quantity
        );
        out
    }

    /// Pretty JSON for scripting.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use shoecart_core::{Product, Stock};
    use shoecart_store::{ChannelNotifier, FixtureCatalog, MemoryStorage};

    fn test_product(id: ProductId, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 99.9,
            image: format!("https://cdn.example.com/{}.jpg", id),
        }
    }

    fn test_store() -> (CartStore, tokio::sync::mpsc::UnboundedReceiver<String>) {
        let catalog = FixtureCatalog::new(
            vec![test_product(1, "Tênis A"), test_product(2, "Tênis B")],
            vec![Stock { id: 1, amount: 2 }, Stock { id: 2, amount: 1 }],
        );
        let (notifier, rx) = ChannelNotifier::new();
        let store = CartStore::new(
            Arc::new(catalog),
            Arc::new(MemoryStorage::new()),
            Arc::new(notifier),
        );
        (store, rx)
    }

    #[tokio::test]
    async fn test_execute_dispatches() {
        let (store, mut rx) = test_store();

        execute(&store, Command::Add { product_id: 1 }).await;
        execute(&store, Command::Add { product_id: 2 }).await;
        execute(&store, Command::Update { product_id: 1, amount: 2 }).await;
        execute(&store, Command::Remove { product_id: 2 }).await;
        execute(&store, Command::Show).await;

        let cart = store.snapshot();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(1), Some(2));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_execute_surfaces_notices() {
        let (store, mut rx) = test_store();

        execute(&store, Command::Add { product_id: 2 }).await;
        execute(&store, Command::Add { product_id: 2 }).await;

        assert_eq!(rx.try_recv().unwrap(), "Quantidade solicitada fora de estoque");
    }

    #[test]
    fn test_render() {
        let cart = Cart::new()
            .added(test_product(1, "Tênis A"))
            .added(test_product(2, "Tênis B"))
            .added(test_product(1, "Tênis A"));

        let text = CartView::from(&cart).render();

        assert_eq!(
            text,
            "   1  x2   Tênis A\n   2  x1   Tênis B\n2 product(s), 3 item(s)"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(CartView::from(&Cart::new()).render(), "Cart is empty");
    }

    #[test]
    fn test_json_view() {
        let cart = Cart::new().added(test_product(1, "Tênis A"));
        let json = CartView::from(&cart).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["itemCount"], 1);
        assert_eq!(value["totalQuantity"], 1);
        assert_eq!(value["entries"][0]["title"], "Tênis A");
    }
}

//! # Cart Store
//!
//! The state container the UI holds: the current cart plus the collaborators
//! every operation needs.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action          Store Method        Lookups           Commit        │
//! │  ─────────          ────────────        ───────           ──────        │
//! │                                                                         │
//! │  Click "add" ──────► add(id) ──────────► stock, product ─► added()      │
//! │                                                                         │
//! │  Change qty ───────► update_amount() ──► stock ──────────► with_amount()│
//! │                                                                         │
//! │  Click remove ─────► remove(id) ───────► (none) ─────────► without()    │
//! │                                                                         │
//! │  Render ───────────► entries() ────────► (read only)                    │
//! │                                                                         │
//! │  Failures never return to the caller: each becomes one Notice.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commit
//! A commit encodes the new cart, writes it to storage and swaps it into
//! memory while holding the lock. If encoding fails nothing is written and
//! memory keeps the old cart.
//!
//! ## Concurrency
//! `add` and `update_amount` take their snapshot of the cart when they start
//! and build the new cart from it after the lookups return. Two overlapping
//! calls can therefore both start from the same snapshot, and the later
//! commit replaces the earlier one instead of stacking on it. The lock is
//! never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shoecart_core::validation::{check_increment, check_requested_amount, is_settable_amount};
use shoecart_core::{
    Cart, CartEntry, CartError, CartOperation, CartResult, Notice, ProductId,
    UpdateProductAmount, CART_STORAGE_KEY,
};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::notify::Notifier;
use crate::storage::{FileStorage, KeyValueStorage};

/// Client-side cart state with stock validation and local persistence.
///
/// Cloning is cheap and every clone shares the same cart.
#[derive(Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    catalog: Arc<dyn Catalog>,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Creates a store on the default storage key, hydrating from storage.
    pub fn new(
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        CartStore::with_storage_key(CART_STORAGE_KEY, catalog, storage, notifier)
    }

    /// Creates a store persisting under `storage_key`, hydrating from storage.
    ///
    /// ## Hydration
    /// - No stored value: empty cart
    /// - Stored value that does not parse: empty cart, logged; the stored
    ///   value stays until the next commit overwrites it
    pub fn with_storage_key(
        storage_key: impl Into<String>,
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let storage_key = storage_key.into();
        let cart = hydrate(storage.as_ref(), &storage_key);

        CartStore {
            cart: Arc::new(Mutex::new(cart)),
            catalog,
            storage,
            notifier,
            storage_key,
        }
    }

    /// Creates a store backed by on-disk storage as configured.
    ///
    /// Uses `config.data_dir` when set, the platform data directory otherwise.
    pub fn open(
        config: &StoreConfig,
        catalog: Arc<dyn Catalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let storage = match &config.data_dir {
            Some(dir) => FileStorage::open(dir)?,
            None => FileStorage::open_default()?,
        };
        info!(dir = ?storage.dir(), key = %config.storage_key, "opening cart store");

        Ok(CartStore::with_storage_key(
            config.storage_key.clone(),
            catalog,
            Arc::new(storage),
            notifier,
        ))
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Current entries in insertion order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.lock().entries().to_vec()
    }

    /// Copy of the current cart, for derived reads such as
    /// [`Cart::amounts_by_product`].
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Stock is looked up first; if the cart already holds at least that
    ///   many (an absent product counts as 0) the add is refused
    /// - The product record is then fetched, whether or not the product is
    ///   already in the cart
    /// - Already in cart: amount + 1. Otherwise appended with amount 1
    pub async fn add(&self, product_id: ProductId) {
        debug!(product_id, "add command");

        if let Err(err) = self.try_add(product_id).await {
            self.report(CartOperation::Add, product_id, &err);
        }
    }

    /// Removes a product's entry.
    pub fn remove(&self, product_id: ProductId) {
        debug!(product_id, "remove command");

        if let Err(err) = self.try_remove(product_id) {
            self.report(CartOperation::Remove, product_id, &err);
        }
    }

    /// Sets a product's amount.
    ///
    /// ## Behavior
    /// - Amount 0 or below: ignored, no lookup and no notice
    /// - Amount above the current stock: refused
    /// - Product not in cart: refused
    pub async fn update_amount(&self, request: UpdateProductAmount) {
        debug!(
            product_id = request.product_id,
            amount = request.amount,
            "update_amount command"
        );

        if let Err(err) = self.try_update_amount(request).await {
            self.report(CartOperation::UpdateAmount, request.product_id, &err);
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    async fn try_add(&self, product_id: ProductId) -> CartResult<()> {
        let current = self.snapshot();
        let existing = current.amount_of(product_id);

        let stock = self.catalog.stock(product_id).await?;
        check_increment(product_id, existing, &stock)?;

        let product = self.catalog.product(product_id).await?;
        if product.id != product_id {
            return Err(CartError::Lookup(format!(
                "catalog returned product {} for {}",
                product.id, product_id
            )));
        }

        self.commit(current.added(product))
    }

    fn try_remove(&self, product_id: ProductId) -> CartResult<()> {
        let mut cart = self.lock();
        let next = cart.without(product_id)?;
        self.persist_and_swap(&mut cart, next)
    }

    async fn try_update_amount(&self, request: UpdateProductAmount) -> CartResult<()> {
        let UpdateProductAmount { product_id, amount } = request;

        if !is_settable_amount(amount) {
            debug!(product_id, amount, "ignoring non-positive amount");
            return Ok(());
        }

        let current = self.snapshot();

        let stock = self.catalog.stock(product_id).await?;
        check_requested_amount(product_id, amount, &stock)?;

        self.commit(current.with_amount(product_id, amount)?)
    }

    /// Persists `next` and makes it the current cart.
    fn commit(&self, next: Cart) -> CartResult<()> {
        let mut cart = self.lock();
        self.persist_and_swap(&mut cart, next)
    }

    fn persist_and_swap(&self, cart: &mut Cart, next: Cart) -> CartResult<()> {
        let raw = serde_json::to_string(&next)?;
        self.storage.set(&self.storage_key, &raw);
        *cart = next;

        info!(
            entries = cart.len(),
            total_quantity = cart.total_quantity(),
            "cart committed"
        );
        Ok(())
    }

    fn report(&self, op: CartOperation, product_id: ProductId, err: &CartError) {
        let notice = Notice::for_failure(op, err);
        warn!(%op, product_id, error = %err, ?notice, "cart operation failed");
        self.notifier.report_error(notice.message());
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reads the persisted cart, falling back to an empty one.
fn hydrate(storage: &dyn KeyValueStorage, key: &str) -> Cart {
    let Some(raw) = storage.get(key) else {
        debug!(key, "no stored cart, starting empty");
        return Cart::new();
    };

    match serde_json::from_str::<Cart>(&raw) {
        Ok(cart) => {
            info!(key, entries = cart.len(), "cart hydrated");
            cart
        }
        Err(e) => {
            warn!(key, error = %e, "stored cart is unreadable, starting empty");
            Cart::new()
        }
    }
}

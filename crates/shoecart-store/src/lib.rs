//! # shoecart-store: Cart State Container
//!
//! [`CartStore`] plus the three collaborators it talks to.
//!
//! ## Module Organization
//! ```text
//! shoecart_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: add / remove / update_amount / entries
//! ├── catalog.rs      ◄─── Catalog trait, HttpCatalog, FixtureCatalog
//! ├── storage.rs      ◄─── KeyValueStorage trait, FileStorage, MemoryStorage
//! ├── notify.rs       ◄─── Notifier trait, TracingNotifier, ChannelNotifier
//! ├── config.rs       ◄─── StoreConfig (TOML + environment)
//! └── error.rs        ◄─── CatalogError, StorageError, ConfigError
//! ```
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   UI owner ──owns──► CartStore ──► Arc<dyn Catalog>        (lookups)    │
//! │                          │     ──► Arc<dyn KeyValueStorage> (snapshot)  │
//! │                          │     ──► Arc<dyn Notifier>       (toasts)     │
//! │                          ▼                                              │
//! │                   Arc<Mutex<Cart>>                                      │
//! │                                                                         │
//! │  The store is built by whoever owns the UI and handed down. There is   │
//! │  no global cart.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use catalog::{Catalog, FixtureCatalog, HttpCatalog};
pub use config::StoreConfig;
pub use error::{CatalogError, CatalogResult, ConfigError, ConfigResult, StorageError};
pub use notify::{ChannelNotifier, Notifier, TracingNotifier};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::CartStore;

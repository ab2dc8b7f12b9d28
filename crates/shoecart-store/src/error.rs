//! # Store Error Types
//!
//! Error types for the collaborators around the cart store.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / io::Error                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError::Lookup (shoecart-core)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Notice → Notifier ("Erro na adição do produto")                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `StorageError` and `ConfigError` only occur while wiring the store up;
//! once a store exists its operations never return errors.

use shoecart_core::{CartError, ProductId};
use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Stock and product lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure (connection refused, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API has no record for this id.
    ///
    /// ## When This Occurs
    /// - `GET /products/{id}` or `GET /stock/{id}` answers 404
    /// - Fixture catalog has no such product
    #[error("{resource} not found: {id}")]
    NotFound {
        resource: &'static str,
        id: ProductId,
    },

    /// The API answered with a non-success status other than 404.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected record.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Fixture file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Creates a NotFound error for a resource and id.
    pub fn not_found(resource: &'static str, id: ProductId) -> Self {
        CatalogError::NotFound { resource, id }
    }
}

impl From<CatalogError> for CartError {
    fn from(err: CatalogError) -> Self {
        CartError::Lookup(err.to_string())
    }
}

/// Result type alias for catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Storage Error
// =============================================================================

/// Errors raised while opening a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Data directory could not be created or resolved.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// No platform data directory and none configured.
    #[error("Could not determine a data directory")]
    NoDataDir,
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `StoreConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_becomes_lookup() {
        let err: CartError = CatalogError::not_found("Product", 4).into();
        assert_eq!(err, CartError::Lookup("Product not found: 4".to_string()));
    }

    #[test]
    fn test_status_message() {
        let err = CatalogError::Status {
            status: 500,
            url: "http://localhost:3333/stock/1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 500 from http://localhost:3333/stock/1"
        );
    }
}

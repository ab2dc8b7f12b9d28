//! # CLI Error Type
//!
//! Errors that stop the CLI before or after a cart command runs.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Startup (config, data dir, catalog file)                              │
//! │       │                                                                 │
//! │       └── failure ──► CliError ──► "shoecart: ..." + exit code 1       │
//! │                                                                         │
//! │  Cart command (add / remove / update)                                  │
//! │       │                                                                 │
//! │       └── failure ──► Notice on stderr, exit code 0                    │
//! │                       (the store never returns an error)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shoecart_store::{CatalogError, ConfigError, StorageError};
use thiserror::Error;

/// Startup and output errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The data directory could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The catalog client or fixture could not be set up.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The cart could not be printed as JSON.
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: CliError = ConfigError::Invalid("storage_key must not be empty".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: storage_key must not be empty"
        );

        let err: CliError = StorageError::NoDataDir.into();
        assert_eq!(err.to_string(), "Could not determine a data directory");
    }
}

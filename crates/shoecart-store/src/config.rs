//! # Store Configuration
//!
//! Where the catalog API lives and where the cart snapshot is kept.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOECART_API_URL=http://localhost:3333                             │
//! │     SHOECART_STORAGE_KEY=@RocketShoes:cart                             │
//! │     SHOECART_DATA_DIR=/var/lib/shoecart                                │
//! │     SHOECART_REQUEST_TIMEOUT_SECS=10                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shoecart/shoecart.toml (Linux)                           │
//! │     ~/Library/Application Support/com.shoecart.shoecart/shoecart.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shoecart.toml
//! api_url = "http://localhost:3333"
//! storage_key = "@RocketShoes:cart"
//! data_dir = "/home/me/.local/share/shoecart"
//! request_timeout_secs = 10
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shoecart_core::CART_STORAGE_KEY;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

fn default_api_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

/// Configuration for a cart store and its collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the stock/product API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Key the cart snapshot is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory for persisted data. Platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// HTTP timeout for catalog lookups.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            api_url: default_api_url(),
            storage_key: default_storage_key(),
            data_dir: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`shoecart.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| ConfigError::Invalid(format!("api_url '{}': {}", self.api_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Invalid(format!(
                "api_url must start with http:// or https://, got: {}",
                self.api_url
            )));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// HTTP timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("SHOECART_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api_url = url;
        }

        if let Some(key) = var("SHOECART_STORAGE_KEY") {
            self.storage_key = key;
        }

        if let Some(dir) = var("SHOECART_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(secs) = var("SHOECART_REQUEST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.request_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid request timeout in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shoecart", "shoecart")
            .map(|dirs| dirs.config_dir().join("shoecart.toml"))
    }
}

//! # Local Storage
//!
//! Synchronous key-value storage for the persisted cart snapshot.
//!
//! ## Contract
//! `get` and `set` never fail from the caller's point of view. Backends that
//! can fail (the filesystem) log the problem and carry on, the same way a
//! browser's local storage is treated as always available.
//!
//! ## File Layout
//! ```text
//! {data_dir}/
//! └── %40RocketShoes%3Acart.json   ◄─── key "@RocketShoes:cart"
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use directories::ProjectDirs;
use tracing::{debug, error, warn};

use crate::error::StorageError;

/// Key-value storage the cart snapshot lives in.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

// =============================================================================
// Memory Storage
// =============================================================================

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a storage pre-filled with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = MemoryStorage::new();
        storage.set(key, value);
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// Storage keeping one file per key in a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) a storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        debug!(?dir, "file storage opened");
        Ok(FileStorage { dir })
    }

    /// Opens the platform data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.shoecart.shoecart`
    /// - **Windows**: `%APPDATA%\shoecart\shoecart\data`
    /// - **Linux**: `~/.local/share/shoecart`
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("com", "shoecart", "shoecart").ok_or(StorageError::NoDataDir)?;
        FileStorage::open(dirs.data_dir())
    }

    /// Directory the files live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a key is stored in.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are written as `%XX`, so distinct keys
    /// never share a file.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(char::from(byte));
            } else {
                let _ = write!(name, "%{:02X}", byte);
            }
        }
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(?path, error = %e, "failed to read stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        // Write then rename so readers never see a partial file
        let result = std::fs::write(&tmp, value).and_then(|_| std::fs::rename(&tmp, &path));

        if let Err(e) = result {
            error!(?path, error = %e, "failed to write stored value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);

        storage.set("k", "[1]");
        storage.set("k", "[2]");
        assert_eq!(storage.get("k").as_deref(), Some("[2]"));
    }

    #[test]
    fn test_file_storage_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let first = FileStorage::open(dir.path()).unwrap();
        assert_eq!(first.get("@RocketShoes:cart"), None);
        first.set("@RocketShoes:cart", r#"[{"id":1}]"#);

        let second = FileStorage::open(dir.path()).unwrap();
        assert_eq!(
            second.get("@RocketShoes:cart").as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_file_storage_key_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        let path = storage.path_for("@RocketShoes:cart");
        assert_eq!(path, dir.path().join("%40RocketShoes%3Acart.json"));
    }

    #[test]
    fn test_file_storage_keys_never_share_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert_ne!(
            storage.path_for("@RocketShoes:cart"),
            storage.path_for("_RocketShoes_cart")
        );
        assert_ne!(storage.path_for("a%40b"), storage.path_for("a@b"));

        storage.set("@RocketShoes:cart", "[1]");
        storage.set("_RocketShoes_cart", "[2]");
        assert_eq!(storage.get("@RocketShoes:cart").as_deref(), Some("[1]"));
        assert_eq!(storage.get("_RocketShoes_cart").as_deref(), Some("[2]"));
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let storage = FileStorage::open(&nested).unwrap();
        storage.set("cart", "[]");

        assert!(nested.join("cart.json").exists());
        assert!(!nested.join("cart.json.tmp").exists());
    }
}

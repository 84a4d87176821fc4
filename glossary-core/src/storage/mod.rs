//! Best-effort persistence over a [`KeyValueStore`]
//!
//! Local storage is treated as best-effort: a failed read degrades to the
//! caller's fallback and a failed write becomes a no-op. Failures are only
//! visible in the log.

mod memory;

pub use memory::InMemoryStore;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::traits::KeyValueStore;

/// Storage key of the glossary metadata list
pub const GLOSSARIES_KEY: &str = "glossaries";

/// Storage key of one glossary's word list (`glossary_<name>`)
#[must_use]
pub fn words_key(glossary_name: &str) -> String {
    format!("glossary_{glossary_name}")
}

/// Storage provider
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct StorageProvider {
    backend: Arc<dyn KeyValueStore>,
}

impl StorageProvider {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Storage provider over a fresh [`InMemoryStore`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// The underlying backend
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    /// Load and deserialize `key`, returning `fallback` when the key is
    /// absent or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                log::warn!("Failed to load from storage key {key}: {e}");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to decode storage key {key}: {e}");
                fallback
            }
        }
    }

    /// Serialize and store `value` under `key`. Failures are logged only.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        self.try_save(key, value);
    }

    /// Like [`Self::save`], but reports whether the value reached the backend
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to encode value for storage key {key}: {e}");
                return false;
            }
        };

        if let Err(e) = self.backend.set(key, &raw) {
            log::warn!("Failed to save to storage key {key}: {e}");
            return false;
        }
        log::debug!("Saved storage key {key} ({} bytes)", raw.len());
        true
    }

    /// Delete `key`. Failures are logged only.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            log::warn!("Failed to remove storage key {key}: {e}");
        }
    }

    /// Delete every key. Failures are logged only.
    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            log::warn!("Failed to clear storage: {e}");
        }
    }
}

//! Durable key-value store backed by a single JSON file
//!
//! The file holds one JSON object mapping storage keys to their serialized
//! values, so the on-disk layout mirrors browser local storage.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use glossary_core::{CoreError, CoreResult, KeyValueStore};

/// JSON file key-value store
///
/// Entries are cached in memory and the whole file is rewritten on every
/// mutation. When a quota is set, a write that would grow the file past it is
/// rejected and nothing changes.
pub struct JsonFileStore {
    path: PathBuf,
    quota_bytes: Option<u64>,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading existing entries
    ///
    /// A missing file is an empty store; it is created on the first write.
    ///
    /// # Errors
    /// `CoreError::StorageError` when the file exists but cannot be read or is not
    /// a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>, quota_bytes: Option<u64>) -> CoreResult<Self> {
        let path = path.into();
        let entries = Self::read_entries(&path)?;
        log::debug!(
            "Opened storage file {} ({} keys)",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            quota_bytes,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn quota_bytes(&self) -> Option<u64> {
        self.quota_bytes
    }

    fn read_entries(path: &Path) -> CoreResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            CoreError::StorageError(format!("Corrupt storage file {}: {e}", path.display()))
        })
    }

    /// Serialize `entries`, enforce the quota and replace the file atomically
    fn persist(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
        let content = serde_json::to_string(entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        if let Some(quota) = self.quota_bytes {
            let size = content.len() as u64;
            if size > quota {
                return Err(CoreError::StorageError(format!(
                    "quota exceeded ({size} > {quota} bytes)"
                )));
            }
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create dir: {e}")))?;
        }

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path).map_err(|e| {
                CoreError::StorageError(format!("Failed to create temp file: {e}"))
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| CoreError::StorageError(format!("Failed to write: {e}")))?;
            file.sync_all()
                .map_err(|e| CoreError::StorageError(format!("Failed to sync: {e}")))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CoreError::StorageError(format!("Failed to rename: {e}"))
        })?;

        Ok(())
    }

    /// Apply `change` to a copy of the entries; commit only if the file was written
    fn mutate(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> CoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.mutate(|entries| entries.remove(key).is_some())
    }

    fn clear(&self) -> CoreResult<()> {
        self.mutate(|entries| {
            entries.clear();
            true
        })
    }
}

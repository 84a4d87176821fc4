//! Durable key-value backend Trait

use crate::error::CoreResult;

/// Raw key-value backend behind [`crate::StorageProvider`]
///
/// Values are JSON documents encoded as strings. Implementations report
/// failures (quota exceeded, storage disabled, I/O) as
/// `CoreError::StorageError`; the provider decides what to do with them.
///
/// Platform implementation:
/// - Tests / ephemeral sessions: `InMemoryStore`
/// - Desktop / CLI: `JsonFileStore` (glossary-app)
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key is absent
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Delete a key (absent keys are not an error)
    fn remove(&self, key: &str) -> CoreResult<()>;

    /// Delete every key
    fn clear(&self) -> CoreResult<()>;
}

//! Glossary Manager Core Library
//!
//! Provides the domain and application layer of the glossary manager:
//! - Glossary metadata (Glossary Repository + Glossary Service)
//! - Per-glossary word lists (Word Service)
//! - JSON / Markdown import and export (Import/Export Service, `formats`)
//! - Synonym suggestions over an HTTP collaborator (Synonym Service)
//!
//! Persistence and network access are abstracted through traits so that the
//! same services run against a JSON file, an in-memory map, or a native bridge.

pub mod error;
pub mod formats;
pub mod services;
pub mod storage;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use storage::{InMemoryStore, StorageProvider};
pub use traits::{ApiClient, GlossaryRepository, InMemoryGlossaryRepository, KeyValueStore};

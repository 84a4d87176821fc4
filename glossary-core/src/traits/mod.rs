//! Storage and transport abstraction trait definitions

mod api_client;
mod glossary_repository;
mod key_value_store;
mod save_dialog;

pub use api_client::{ApiClient, BridgeTransport, DEFAULT_TIMEOUT};
pub use glossary_repository::{GlossaryRepository, InMemoryGlossaryRepository};
pub use key_value_store::KeyValueStore;
pub use save_dialog::{FileFilter, SaveDialog};

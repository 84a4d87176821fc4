//! Business logic service layer

mod glossary_service;
mod import_export_service;
mod synonym_service;
mod word_service;

pub use glossary_service::GlossaryService;
pub use import_export_service::ImportExportService;
pub use synonym_service::{SynonymService, DEFAULT_DEBOUNCE};
pub use word_service::WordService;

use std::sync::Arc;

use crate::storage::StorageProvider;
use crate::traits::{ApiClient, GlossaryRepository};

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects platform-specific
/// storage and transport implementations.
pub struct ServiceContext {
    /// Durable key-value persistence
    pub storage: StorageProvider,
    /// In-memory glossary metadata cache
    pub glossary_repository: Arc<dyn GlossaryRepository>,
    /// Outbound HTTP client
    pub api_client: Arc<dyn ApiClient>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(
        storage: StorageProvider,
        glossary_repository: Arc<dyn GlossaryRepository>,
        api_client: Arc<dyn ApiClient>,
    ) -> Self {
        Self {
            storage,
            glossary_repository,
            api_client,
        }
    }
}

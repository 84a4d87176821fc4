//! Platform-agnostic application bootstrap for the glossary manager.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection),
//! `AppConfig` (settings file + environment) and the platform adapters.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use glossary_core::error::{CoreError, CoreResult};
use glossary_core::services::{
    GlossaryService, ImportExportService, ServiceContext, SynonymService, WordService,
};
use glossary_core::storage::{StorageProvider, GLOSSARIES_KEY};
use glossary_core::traits::{
    ApiClient, GlossaryRepository, InMemoryGlossaryRepository, KeyValueStore, SaveDialog,
};
use glossary_core::types::Glossary;
use serde_json::Value;

use crate::adapters::{FileDownloader, HttpApiClient, JsonFileStore};
pub use crate::config::AppConfig;

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder` and passes it by reference.
pub struct AppState {
    /// Service context (storage, repository, API client)
    pub ctx: Arc<ServiceContext>,
    /// Glossary metadata service
    pub glossary_service: Arc<GlossaryService>,
    /// Import/export service
    pub import_export_service: ImportExportService,
    /// Synonym suggestion service
    pub synonym_service: SynonymService,
    /// Export file delivery
    pub downloader: FileDownloader,
    config: AppConfig,
    save_dialog: Option<Arc<dyn SaveDialog>>,
}

impl AppState {
    /// Open the JSON file store described by `config` and build on top of it.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if the storage file is unreadable.
    pub fn from_config(config: AppConfig) -> CoreResult<Self> {
        let store = JsonFileStore::open(config.store_file(), config.storage_quota_bytes)?;
        AppStateBuilder::new()
            .storage(Arc::new(store))
            .config(config)
            .build()
    }

    pub fn storage(&self) -> &StorageProvider {
        &self.ctx.storage
    }

    pub fn api_client(&self) -> &Arc<dyn ApiClient> {
        &self.ctx.api_client
    }

    pub fn glossary_repository(&self) -> &Arc<dyn GlossaryRepository> {
        &self.ctx.glossary_repository
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fresh word service bound to one glossary (a new instance per call)
    pub fn word_service(&self, glossary_name: &str) -> WordService {
        self.glossary_service.word_service(glossary_name)
    }

    /// POST a glossary's words to the configured export endpoint
    pub async fn export_words_remote(&self, glossary_name: &str) -> CoreResult<Value> {
        self.import_export_service
            .export_words_remote(glossary_name, &self.config.export_url())
            .await
    }

    /// Rebuild every service over the same adapters.
    ///
    /// The repository is discarded and reseeded from storage, so state that was
    /// never persisted does not survive.
    #[must_use]
    pub fn reset(&self) -> Self {
        log::debug!("Resetting application state");
        assemble(
            self.ctx.storage.clone(),
            Arc::clone(&self.ctx.api_client),
            self.config.clone(),
            self.save_dialog.clone(),
        )
    }
}

/// Wire services over the given adapters and seed the repository from storage
fn assemble(
    storage: StorageProvider,
    api_client: Arc<dyn ApiClient>,
    config: AppConfig,
    save_dialog: Option<Arc<dyn SaveDialog>>,
) -> AppState {
    let seeded: Vec<Glossary> = storage.load(GLOSSARIES_KEY, Vec::new());
    let seeded_count = seeded.len();
    let ctx = Arc::new(ServiceContext::new(
        storage,
        Arc::new(InMemoryGlossaryRepository::with_glossaries(seeded)),
        Arc::clone(&api_client),
    ));

    let glossary_service = Arc::new(GlossaryService::new(Arc::clone(&ctx)));
    let import_export_service =
        ImportExportService::new(Arc::clone(&ctx), Arc::clone(&glossary_service));
    let synonym_service =
        SynonymService::new(api_client, config.synonym_url()).with_debounce(config.debounce());

    let mut downloader = FileDownloader::new(config.download_dir.clone());
    if let Some(dialog) = &save_dialog {
        downloader = downloader.with_dialog(Arc::clone(dialog));
    }

    log::info!("Application state ready: {seeded_count} glossaries");

    AppState {
        ctx,
        glossary_service,
        import_export_service,
        synonym_service,
        downloader,
        config,
        save_dialog,
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `storage` - durable key-value backend
///
/// # Optional
/// - `api_client` - defaults to `HttpApiClient` with the configured timeout
/// - `config` - defaults to `AppConfig::default()`
/// - `save_dialog` - without one, downloads go to the configured directory
pub struct AppStateBuilder {
    storage: Option<Arc<dyn KeyValueStore>>,
    api_client: Option<Arc<dyn ApiClient>>,
    config: Option<AppConfig>,
    save_dialog: Option<Arc<dyn SaveDialog>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: None,
            api_client: None,
            config: None,
            save_dialog: None,
        }
    }

    #[must_use]
    pub fn storage(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(store);
        self
    }

    #[must_use]
    pub fn api_client(mut self, client: Arc<dyn ApiClient>) -> Self {
        self.api_client = Some(client);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn save_dialog(mut self, dialog: Arc<dyn SaveDialog>) -> Self {
        self.save_dialog = Some(dialog);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing, or
    /// `CoreError::NetworkError` if the default HTTP client cannot be created.
    pub fn build(self) -> CoreResult<AppState> {
        let storage = self
            .storage
            .ok_or_else(|| CoreError::ValidationError("storage is required".to_string()))?;
        let config = self.config.unwrap_or_default();
        let api_client: Arc<dyn ApiClient> = match self.api_client {
            Some(client) => client,
            None => Arc::new(HttpApiClient::new(config.request_timeout())?),
        };

        Ok(assemble(
            StorageProvider::new(storage),
            api_client,
            config,
            self.save_dialog,
        ))
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

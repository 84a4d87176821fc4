#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and the `AppState` lifecycle.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use glossary_app::{AppConfig, AppState, AppStateBuilder};
use glossary_core::error::{CoreError, CoreResult};
use glossary_core::storage::{words_key, GLOSSARIES_KEY};
use glossary_core::traits::{ApiClient, GlossaryRepository, KeyValueStore};
use glossary_core::types::{ExportFormat, Glossary, NewGlossary};
use glossary_core::InMemoryStore;
use serde_json::{json, Value};
use tokio::sync::Mutex;

// ===== Mock Implementations =====

/// Records every POST and answers with a fixed value.
struct RecordingApiClient {
    response: Value,
    requests: Mutex<Vec<(String, Value)>>,
}

impl RecordingApiClient {
    fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ApiClient for RecordingApiClient {
    async fn post_json(
        &self,
        url: &str,
        body: Value,
        _timeout: Option<Duration>,
    ) -> CoreResult<Value> {
        self.requests.lock().await.push((url.to_string(), body));
        Ok(self.response.clone())
    }
}

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: dir.join("data"),
        download_dir: dir.join("downloads"),
        api_base_url: "http://backend.test".to_string(),
        ..AppConfig::default()
    }
}

fn build_in_memory(store: Arc<InMemoryStore>, client: Arc<RecordingApiClient>) -> AppState {
    AppStateBuilder::new()
        .storage(store)
        .api_client(client)
        .build()
        .expect("build should succeed")
}

// ===== Builder =====

#[test]
fn build_without_storage_fails() {
    let result = AppStateBuilder::new().build();
    match result {
        Err(CoreError::ValidationError(msg)) => assert_eq!(msg, "storage is required"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("build should fail without storage"),
    }
}

#[test]
fn build_defaults_to_http_client() {
    let state = AppStateBuilder::new()
        .storage(Arc::new(InMemoryStore::new()))
        .build()
        .unwrap();
    assert!(state.glossary_service.get_all_glossaries().is_empty());
    assert_eq!(
        state.synonym_service.endpoint(),
        AppConfig::default().synonym_url()
    );
}

#[test]
fn build_seeds_repository_from_storage() {
    let store = Arc::new(InMemoryStore::new());
    let stored = vec![
        Glossary {
            name: "Animals".to_string(),
            description: "Fauna".to_string(),
            last_modified: "2024-05-01T10:00:00Z".to_string(),
        },
        Glossary {
            name: "Plants".to_string(),
            description: String::new(),
            last_modified: "2024-05-01T11:00:00Z".to_string(),
        },
    ];
    store
        .set(GLOSSARIES_KEY, &serde_json::to_string(&stored).unwrap())
        .unwrap();

    let state = build_in_memory(store, Arc::new(RecordingApiClient::new(json!({}))));

    assert_eq!(state.glossary_service.get_all_glossaries(), stored);
    assert_eq!(
        state.glossary_repository().get_by_name("Plants").unwrap().name,
        "Plants"
    );
}

#[test]
fn word_service_factory_shares_storage() {
    let state = build_in_memory(
        Arc::new(InMemoryStore::new()),
        Arc::new(RecordingApiClient::new(json!({}))),
    );
    state
        .glossary_service
        .create_glossary("Animals", "", None)
        .unwrap();

    state
        .word_service("Animals")
        .add_word("cat", "A small feline", vec!["kitty".to_string()])
        .unwrap();

    let words = state.word_service("Animals").load_words();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].synonyms, vec!["kitty"]);
    assert!(state
        .storage()
        .backend()
        .get(&words_key("Animals"))
        .unwrap()
        .is_some());
}

// ===== Reset =====

#[test]
fn reset_reloads_persisted_state_only() {
    let store = Arc::new(InMemoryStore::new());
    let state = build_in_memory(store, Arc::new(RecordingApiClient::new(json!({}))));

    state
        .glossary_service
        .create_glossary("Persisted", "", None)
        .unwrap();
    // Repository-only insert, never saved
    state
        .glossary_repository()
        .create(NewGlossary::new("Transient", ""), None);
    assert_eq!(state.glossary_service.get_all_glossaries().len(), 2);

    let fresh = state.reset();
    let names: Vec<String> = fresh
        .glossary_service
        .get_all_glossaries()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Persisted"]);
}

#[test]
fn reset_after_clear_starts_empty() {
    let state = build_in_memory(
        Arc::new(InMemoryStore::new()),
        Arc::new(RecordingApiClient::new(json!({}))),
    );
    state
        .glossary_service
        .create_glossary("Animals", "", None)
        .unwrap();
    state.storage().clear();

    let fresh = state.reset();
    assert!(fresh.glossary_service.get_all_glossaries().is_empty());
    assert_eq!(fresh.config(), state.config());
}

// ===== Remote export =====

#[tokio::test]
async fn export_words_remote_posts_to_configured_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let client = Arc::new(RecordingApiClient::new(json!({ "status": "ok" })));
    let state = AppStateBuilder::new()
        .storage(Arc::new(InMemoryStore::new()))
        .api_client(Arc::clone(&client) as Arc<dyn ApiClient>)
        .config(test_config(dir.path()))
        .build()
        .unwrap();

    state
        .glossary_service
        .create_glossary("Animals", "", None)
        .unwrap();
    state
        .word_service("Animals")
        .add_word("cat", "A small feline", Vec::new())
        .unwrap();

    let response = state.export_words_remote("Animals").await.unwrap();
    assert_eq!(response, json!({ "status": "ok" }));

    let requests = client.requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "http://backend.test/api/words");
    assert_eq!(requests[0].1["words"][0]["word"], "cat");
}

#[tokio::test]
async fn export_words_remote_unknown_glossary() {
    let state = build_in_memory(
        Arc::new(InMemoryStore::new()),
        Arc::new(RecordingApiClient::new(json!({}))),
    );
    let err = state.export_words_remote("Missing").await.unwrap_err();
    assert!(matches!(err, CoreError::GlossaryNotFound(name) if name == "Missing"));
}

#[tokio::test]
async fn synonym_service_uses_configured_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let client = Arc::new(RecordingApiClient::new(
        json!({ "synonyms": ["Kitty", "feline"] }),
    ));
    let state = AppStateBuilder::new()
        .storage(Arc::new(InMemoryStore::new()))
        .api_client(Arc::clone(&client) as Arc<dyn ApiClient>)
        .config(test_config(dir.path()))
        .build()
        .unwrap();

    let suggestions = state
        .synonym_service
        .suggest("cat", "A small feline", &["feline".to_string()])
        .await
        .unwrap();
    assert_eq!(suggestions, vec!["kitty"]);

    let requests = client.requests.lock().await;
    assert_eq!(requests[0].0, "http://backend.test/synonym/getSynonym");
}

// ===== File-backed state =====

#[test]
fn from_config_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    {
        let state = AppState::from_config(config.clone()).unwrap();
        state
            .glossary_service
            .create_glossary("Animals", "Fauna", None)
            .unwrap();
        state
            .word_service("Animals")
            .add_word("cat", "A small feline", Vec::new())
            .unwrap();
    }

    assert!(config.store_file().exists());
    let reopened = AppState::from_config(config).unwrap();
    let glossary = reopened.glossary_service.get_glossary("Animals").unwrap();
    assert_eq!(glossary.description, "Fauna");
    assert_eq!(reopened.word_service("Animals").load_words().len(), 1);
}

#[test]
fn quota_failures_are_silent() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage_quota_bytes: Some(16),
        ..test_config(dir.path())
    };

    let state = AppState::from_config(config.clone()).unwrap();
    let created = state
        .glossary_service
        .create_glossary("A glossary with a long name", "", None);
    assert!(created.is_ok());
    assert_eq!(state.glossary_service.get_all_glossaries().len(), 1);

    let reopened = AppState::from_config(config).unwrap();
    assert!(reopened.glossary_service.get_all_glossaries().is_empty());
}

#[test]
fn rename_over_quota_keeps_words_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage_quota_bytes: Some(400),
        ..test_config(dir.path())
    };

    let state = AppState::from_config(config.clone()).unwrap();
    state.glossary_service.create_glossary("Old", "", None).unwrap();
    let words = state.word_service("Old");
    words
        .add_word("cat", "A small feline", vec!["kitty".to_string()])
        .unwrap();
    words
        .add_word("dog", "A loyal canine", vec!["hound".to_string()])
        .unwrap();
    assert_eq!(words.load_words().len(), 2);

    let renamed = state
        .glossary_service
        .update_glossary("Old", "New", "", None);
    assert!(matches!(renamed, Err(CoreError::StorageError(_))));
    assert!(state.glossary_service.get_glossary("Old").is_some());

    let reopened = AppState::from_config(config).unwrap();
    assert!(reopened.glossary_service.get_glossary("Old").is_some());
    assert!(reopened.glossary_service.get_glossary("New").is_none());
    assert_eq!(reopened.word_service("Old").load_words().len(), 2);
    assert!(reopened.word_service("New").load_words().is_empty());
}

#[test]
fn export_then_download_to_fallback_dir() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::from_config(test_config(dir.path())).unwrap();
    state
        .glossary_service
        .create_glossary("Mes Animaux!", "", None)
        .unwrap();

    let file = state
        .import_export_service
        .export_glossary("Mes Animaux!", ExportFormat::Markdown)
        .unwrap();
    let saved: PathBuf = state.downloader.download_export(&file).unwrap().unwrap();

    assert_eq!(saved, dir.path().join("downloads").join("mesanimaux.md"));
    let written = std::fs::read_to_string(saved).unwrap();
    assert!(written.starts_with("# Mes Animaux!"));
}

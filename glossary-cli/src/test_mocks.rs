//! Test-only mocks for CLI command tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use glossary_app::{AppConfig, AppState, AppStateBuilder};
use glossary_core::error::{CoreError, CoreResult};
use glossary_core::traits::ApiClient;
use glossary_core::InMemoryStore;
use serde_json::Value;
use tokio::sync::Mutex;

/// Answers every POST with a fixed value, or a network error when failing.
pub struct MockApiClient {
    response: Option<Value>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockApiClient {
    pub fn new(response: Value) -> Self {
        Self {
            response: Some(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn post_json(
        &self,
        url: &str,
        body: Value,
        _timeout: Option<Duration>,
    ) -> CoreResult<Value> {
        self.requests.lock().await.push((url.to_string(), body));
        self.response
            .clone()
            .ok_or_else(|| CoreError::NetworkError("connection refused".to_string()))
    }
}

/// In-memory state whose downloads land in `<tempdir>/downloads`.
pub fn state_with_client(client: Arc<MockApiClient>) -> (AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        data_dir: dir.path().join("data"),
        download_dir: dir.path().join("downloads"),
        ..AppConfig::default()
    };
    let state = AppStateBuilder::new()
        .storage(Arc::new(InMemoryStore::new()))
        .api_client(client)
        .config(config)
        .build()
        .unwrap();
    (state, dir)
}

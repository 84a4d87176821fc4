//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::storage::StorageProvider;
use crate::traits::{ApiClient, InMemoryGlossaryRepository, KeyValueStore};

/// Fixed timestamp on 2024-05-01 at `hour`:00 UTC
pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

// ===== FailingStore =====

/// Backend that rejects every operation, like a full or disabled store
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("storage disabled".to_string()))
    }

    fn clear(&self) -> CoreResult<()> {
        Err(CoreError::StorageError("storage disabled".to_string()))
    }
}

// ===== QuotaStore =====

/// In-memory backend that rejects writes once the stored values would exceed
/// `limit` bytes in total
pub struct QuotaStore {
    entries: StdMutex<HashMap<String, String>>,
    limit: usize,
}

impl QuotaStore {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: StdMutex::new(HashMap::new()),
            limit,
        }
    }
}

impl KeyValueStore for QuotaStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut entries = self.entries.lock().unwrap();
        let used: usize = entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum();
        if used + value.len() > self.limit {
            return Err(CoreError::StorageError("quota exceeded".to_string()));
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

// ===== MockApiClient =====

type ErrorFactory = Box<dyn Fn() -> CoreError + Send + Sync>;

/// Records requests and answers with a canned response or error
pub struct MockApiClient {
    response: Result<Value, ErrorFactory>,
    delay: Option<Duration>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockApiClient {
    pub fn with_response(response: Value) -> Self {
        Self {
            response: Ok(response),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_error(error: impl Fn() -> CoreError + Send + Sync + 'static) -> Self {
        Self {
            response: Err(Box::new(error)),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Delay every answer (to exercise in-flight cancellation)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// `(url, body)` of every request received
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
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(factory) => Err(factory()),
        }
    }
}

// ===== Factory methods =====

/// Context over fresh in-memory storage and an API client that answers `{}`
pub fn create_test_context() -> Arc<ServiceContext> {
    create_test_context_with_client(Arc::new(MockApiClient::with_response(json!({}))))
}

/// Context over the given backend and an API client that answers `{}`
pub fn create_test_context_with_store(store: Arc<dyn KeyValueStore>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        StorageProvider::new(store),
        Arc::new(InMemoryGlossaryRepository::new()),
        Arc::new(MockApiClient::with_response(json!({}))),
    ))
}

/// Context over fresh in-memory storage and the given API client
pub fn create_test_context_with_client(client: Arc<MockApiClient>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        StorageProvider::in_memory(),
        Arc::new(InMemoryGlossaryRepository::new()),
        client,
    ))
}

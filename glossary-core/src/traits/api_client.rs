//! Outbound HTTP abstraction Trait

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::CoreResult;
use crate::types::WordItem;

/// Default request time budget
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP(S) POST client
///
/// Platform implementation:
/// - Desktop / CLI: `HttpApiClient` (glossary-app, reqwest)
/// - Native shell: `HttpApiClient` with a [`BridgeTransport`]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// POST a JSON body and return the decoded JSON response
    ///
    /// # Arguments
    /// * `url` - endpoint URL
    /// * `body` - request body
    /// * `timeout` - time budget, [`DEFAULT_TIMEOUT`] when `None`
    ///
    /// # Errors
    /// `CoreError::Timeout` when the budget is exceeded, `CoreError::NetworkError`
    /// for transport failures and non-success statuses.
    async fn post_json(&self, url: &str, body: Value, timeout: Option<Duration>)
        -> CoreResult<Value>;

    /// POST a word list as `{ "words": [...] }`
    async fn post_words(&self, url: &str, words: &[WordItem]) -> CoreResult<Value> {
        self.post_json(url, json!({ "words": words }), None).await
    }
}

/// Native-shell command bridge
///
/// When the application runs inside a native wrapper, outbound requests are
/// proxied through the shell's `proxy_request` command instead of the network
/// stack of the current process.
#[async_trait]
pub trait BridgeTransport: Send + Sync {
    /// Invoke a shell command with JSON arguments
    async fn invoke(&self, command: &str, args: Value) -> CoreResult<Value>;
}

//! reqwest-backed `ApiClient`
//!
//! Sends JSON POST requests directly, or through a native-shell
//! [`BridgeTransport`] when one is injected. Either way the call is bounded by
//! a time budget and aborted when it runs out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use glossary_core::traits::BridgeTransport;
use glossary_core::{ApiClient, CoreError, CoreResult};
use serde_json::{json, Value};

/// Bridge command that performs a request on behalf of the frontend
pub const PROXY_COMMAND: &str = "proxy_request";

const LOG_BODY_LIMIT: usize = 256;

/// HTTP client for the synonym and export endpoints
pub struct HttpApiClient {
    client: reqwest::Client,
    default_timeout: Duration,
    bridge: Option<Arc<dyn BridgeTransport>>,
}

impl HttpApiClient {
    /// Create a client whose requests default to `default_timeout`
    ///
    /// # Errors
    /// `CoreError::NetworkError` if the TLS backend cannot be initialised.
    pub fn new(default_timeout: Duration) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("glossary-manager/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoreError::NetworkError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::from_client(client, default_timeout))
    }

    /// Wrap a preconfigured `reqwest::Client` (proxy, TLS or header settings)
    #[must_use]
    pub fn from_client(client: reqwest::Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
            bridge: None,
        }
    }

    /// Route every request through a native bridge instead of the network
    #[must_use]
    pub fn with_bridge(mut self, bridge: Arc<dyn BridgeTransport>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    pub fn uses_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    async fn send(&self, url: &str, body: Value) -> CoreResult<Value> {
        if let Some(bridge) = &self.bridge {
            log::debug!("[bridge] POST {url}");
            let args = json!({ "method": "POST", "url": url, "body": body });
            return bridge.invoke(PROXY_COMMAND, args).await;
        }

        log::debug!("[http] POST {url}");
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Timeout(e.to_string())
                } else {
                    CoreError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        log::debug!("[http] Response Status: {}", status.as_u16());

        let text = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            log::warn!("[http] POST {url} failed with HTTP {}", status.as_u16());
            return Err(CoreError::NetworkError(format!(
                "HTTP {} {}",
                status.as_u16(),
                truncate_for_log(&text)
            )));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            log::error!("[http] Invalid JSON from {url}: {}", truncate_for_log(&text));
            CoreError::SerializationError(e.to_string())
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn post_json(
        &self,
        url: &str,
        body: Value,
        timeout: Option<Duration>,
    ) -> CoreResult<Value> {
        let budget = timeout.unwrap_or(self.default_timeout);
        match tokio::time::timeout(budget, self.send(url, body)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("POST {url} aborted after {}ms", budget.as_millis());
                Err(CoreError::Timeout(format!(
                    "POST {url} did not complete within {}ms",
                    budget.as_millis()
                )))
            }
        }
    }
}

fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

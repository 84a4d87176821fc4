//! Synonym suggestion service
//!
//! Talks to the suggestion endpoint (`POST {word, definition, synonyms}` →
//! `{synonyms}`) through the [`ApiClient`]. The debounced variant is meant for
//! search-as-you-type input: only the most recent request yields a result.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};
use crate::traits::ApiClient;
use crate::types::{normalize_synonyms, SynonymRequest, SynonymResponse};

/// Default debounce window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Synonym suggestion service
pub struct SynonymService {
    api_client: Arc<dyn ApiClient>,
    endpoint: String,
    debounce: Duration,
    /// Bumped by every debounced request; older requests watch it to notice
    /// they were superseded.
    latest: watch::Sender<u64>,
}

impl SynonymService {
    /// Create a synonym service for `endpoint`
    #[must_use]
    pub fn new(api_client: Arc<dyn ApiClient>, endpoint: impl Into<String>) -> Self {
        Self {
            api_client,
            endpoint: endpoint.into(),
            debounce: DEFAULT_DEBOUNCE,
            latest: watch::Sender::new(0),
        }
    }

    /// Override the debounce window
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask for suggestions
    ///
    /// The result is lowercased, de-duplicated and excludes the word itself and
    /// the synonyms already known.
    pub async fn suggest(
        &self,
        word: &str,
        definition: &str,
        synonyms: &[String],
    ) -> CoreResult<Vec<String>> {
        let request = SynonymRequest {
            word: word.to_string(),
            definition: definition.to_string(),
            synonyms: synonyms.to_vec(),
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let raw = self.api_client.post_json(&self.endpoint, body, None).await?;
        let response: SynonymResponse = serde_json::from_value(raw).map_err(|e| {
            log::error!("Unexpected synonym response: {e}");
            CoreError::SerializationError(e.to_string())
        })?;

        let known: Vec<String> = synonyms.iter().map(|s| s.trim().to_lowercase()).collect();
        let suggestions: Vec<String> = normalize_synonyms(word, response.synonyms)
            .into_iter()
            .filter(|s| !known.contains(s))
            .collect();

        log::debug!("{} synonym suggestions for {word}", suggestions.len());
        Ok(suggestions)
    }

    /// Debounced [`Self::suggest`]
    ///
    /// Waits for the debounce window, then performs the request. Returns
    /// `Ok(None)` when a newer call started during the wait or while the
    /// request was in flight; the superseded request is dropped.
    pub async fn suggest_debounced(
        &self,
        word: &str,
        definition: &str,
        synonyms: &[String],
    ) -> CoreResult<Option<Vec<String>>> {
        self.latest.send_modify(|generation| *generation = generation.wrapping_add(1));
        let mut superseded = self.latest.subscribe();

        tokio::select! {
            () = tokio::time::sleep(self.debounce) => {}
            _ = superseded.changed() => {
                log::debug!("Suggestion for {word} superseded during debounce");
                return Ok(None);
            }
        }

        tokio::select! {
            result = self.suggest(word, definition, synonyms) => result.map(Some),
            _ = superseded.changed() => {
                log::debug!("Suggestion for {word} superseded while in flight");
                Ok(None)
            }
        }
    }
}

//! Glossary metadata types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

/// Glossary metadata record
///
/// Persisted as a list under the `glossaries` storage key. The word list lives
/// separately under `glossary_<name>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Glossary {
    /// Glossary name (unique within the collection)
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Time of the last mutation, see [`datetime::format_timestamp`]
    #[serde(default)]
    pub last_modified: String,
}

impl Glossary {
    /// Builds a record stamped with `now`.
    #[must_use]
    pub fn new(name: String, description: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            description,
            last_modified: datetime::format_timestamp(now),
        }
    }

    /// Parsed `last_modified`, if it was written in RFC 3339.
    #[must_use]
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        datetime::parse_timestamp(&self.last_modified)
    }
}

/// Request to create a glossary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGlossary {
    pub name: String,
    pub description: String,
}

impl NewGlossary {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

//! Import/export related types.

use serde::{Deserialize, Serialize};

use super::{Glossary, WordItem};

/// Export/import unit: glossary metadata plus its words.
///
/// This is the on-disk shape of a JSON export. `description` is omitted when
/// absent; a Markdown export without a real description re-imports as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlossaryExport {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub words: Vec<WordItem>,
}

impl GlossaryExport {
    /// Combines stored metadata with its word list. An empty description is
    /// treated as absent.
    #[must_use]
    pub fn from_parts(glossary: &Glossary, words: Vec<WordItem>) -> Self {
        let description = Some(glossary.description.clone()).filter(|d| !d.is_empty());
        Self {
            name: glossary.name.clone(),
            description,
            words,
        }
    }
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }

    /// MIME type passed to the download collaborator.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Markdown => "text/markdown",
        }
    }

    /// Detects the format from a file name's extension (case-insensitive).
    ///
    /// `.json` maps to JSON, `.md` and `.markdown` to Markdown.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// A serialized glossary ready to be saved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    /// File content
    pub content: String,
    /// Sanitized file name including the extension
    pub suggested_filename: String,
    /// MIME type of `content`
    pub mime_type: String,
}

/// Request body of the synonym-suggestion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymRequest {
    pub word: String,
    pub definition: String,
    pub synonyms: Vec<String>,
}

/// Response body of the synonym-suggestion endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynonymResponse {
    #[serde(default)]
    pub synonyms: Vec<String>,
}

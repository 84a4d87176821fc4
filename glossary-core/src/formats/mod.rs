//! Glossary file formats
//!
//! Pure conversions between [`GlossaryExport`] and its JSON / Markdown file
//! representations. No I/O happens here.

mod json;
mod markdown;

pub use json::{export_to_json, import_from_json};
pub use markdown::{export_to_markdown, import_from_markdown};

use crate::error::{CoreError, CoreResult};
use crate::types::{ExportFormat, GlossaryExport};

/// Serialize a glossary in the given format
pub fn export(glossary: &GlossaryExport, format: ExportFormat) -> CoreResult<String> {
    match format {
        ExportFormat::Json => export_to_json(glossary),
        ExportFormat::Markdown => Ok(export_to_markdown(glossary)),
    }
}

/// Parse file content, choosing the format from the file extension
///
/// `.json` is parsed as JSON, `.md` / `.markdown` as Markdown; anything else
/// fails with `CoreError::UnsupportedFormat`.
pub fn import_from_file(file_name: &str, content: &str) -> CoreResult<GlossaryExport> {
    match ExportFormat::from_file_name(file_name) {
        Some(ExportFormat::Json) => import_from_json(content),
        Some(ExportFormat::Markdown) => import_from_markdown(content),
        None => Err(CoreError::UnsupportedFormat(file_name.to_string())),
    }
}

/// File name derived from a glossary name
///
/// Keeps ASCII letters and digits only, lowercased, then appends the format
/// extension. A name with no usable characters becomes `glossary`.
#[must_use]
pub fn sanitize_filename(name: &str, format: ExportFormat) -> String {
    let mut stem: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if stem.is_empty() {
        stem.push_str("glossary");
    }
    format!("{stem}.{}", format.extension())
}

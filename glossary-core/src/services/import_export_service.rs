//! Glossary import/export service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::formats;
use crate::services::{GlossaryService, ServiceContext};
use crate::types::{ExportFormat, ExportedFile, Glossary, GlossaryExport, WordItem};

/// Glossary import/export service
pub struct ImportExportService {
    ctx: Arc<ServiceContext>,
    glossary_service: Arc<GlossaryService>,
}

impl ImportExportService {
    /// Create an import/export service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, glossary_service: Arc<GlossaryService>) -> Self {
        Self {
            ctx,
            glossary_service,
        }
    }

    /// Metadata plus words of a stored glossary
    pub fn collect(&self, name: &str) -> CoreResult<GlossaryExport> {
        let glossary = self
            .glossary_service
            .get_glossary(name)
            .ok_or_else(|| CoreError::GlossaryNotFound(name.to_string()))?;
        let words = self.glossary_service.word_service(name).load_words();
        Ok(GlossaryExport::from_parts(&glossary, words))
    }

    /// Serialize a stored glossary
    ///
    /// # Arguments
    /// * `name` - glossary name
    /// * `format` - target format
    pub fn export_glossary(&self, name: &str, format: ExportFormat) -> CoreResult<ExportedFile> {
        let export = self.collect(name)?;
        let content = formats::export(&export, format)?;

        log::info!(
            "Exported glossary {name} as {format:?} ({} words)",
            export.words.len()
        );

        Ok(ExportedFile {
            content,
            suggested_filename: formats::sanitize_filename(name, format),
            mime_type: format.mime_type().to_string(),
        })
    }

    /// Parse an import file without storing anything
    pub fn preview_import(&self, file_name: &str, content: &str) -> CoreResult<GlossaryExport> {
        formats::import_from_file(file_name, content)
    }

    /// Parse an import file and store it as a new glossary
    ///
    /// # Errors
    /// Parse errors from [`formats::import_from_file`],
    /// `CoreError::ValidationError` if a glossary with the same name exists, or
    /// `CoreError::StorageError` if the words could not be stored. In that case
    /// the newly created glossary is removed again.
    pub fn import_glossary(
        &self,
        file_name: &str,
        content: &str,
        now: Option<DateTime<Utc>>,
    ) -> CoreResult<Glossary> {
        let imported = match self.preview_import(file_name, content) {
            Ok(imported) => imported,
            Err(e) => {
                log::warn!("Import of {file_name} rejected: {e}");
                return Err(e);
            }
        };

        let glossary = self.glossary_service.create_glossary(
            &imported.name,
            imported.description.as_deref().unwrap_or_default(),
            now,
        )?;

        let words: Vec<WordItem> = imported
            .words
            .into_iter()
            .map(|w| WordItem::new(w.word, w.definition, w.synonyms))
            .collect();
        if !self
            .glossary_service
            .word_service(&glossary.name)
            .replace_words(&words)
        {
            log::warn!(
                "Import of {file_name} rolled back: {} words could not be stored",
                words.len()
            );
            self.glossary_service.delete_glossary(&glossary.name)?;
            return Err(CoreError::StorageError(format!(
                "Could not store the words of \"{}\"",
                glossary.name
            )));
        }

        log::info!(
            "Imported glossary {} from {file_name} ({} words)",
            glossary.name,
            words.len()
        );
        Ok(glossary)
    }

    /// Send a glossary's words to the export endpoint
    ///
    /// Network failures are returned to the caller, which may still fall back
    /// to a local download.
    pub async fn export_words_remote(&self, name: &str, url: &str) -> CoreResult<Value> {
        let export = self.collect(name)?;
        self.ctx.api_client.post_words(url, &export.words).await
    }
}

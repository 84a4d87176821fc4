//! Glossary management service

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, WordService};
use crate::storage::{words_key, GLOSSARIES_KEY};
use crate::types::{Glossary, NewGlossary, WordItem};

/// Glossary management service
///
/// Wraps the repository with automatic persistence: every mutation is followed
/// by a full re-save of the metadata list.
pub struct GlossaryService {
    ctx: Arc<ServiceContext>,
}

impl GlossaryService {
    /// Create a glossary service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Create a glossary and persist the list
    ///
    /// # Errors
    /// `CoreError::ValidationError` if the name is blank or already used.
    pub fn create_glossary(
        &self,
        name: &str,
        description: &str,
        now: Option<DateTime<Utc>>,
    ) -> CoreResult<Glossary> {
        let name = Self::validate_name(name)?;
        self.ensure_name_available(name)?;

        let glossary = self
            .ctx
            .glossary_repository
            .create(NewGlossary::new(name, description.trim()), now);
        self.persist();

        log::info!("Glossary created: {name}");
        Ok(glossary)
    }

    /// Persisted glossary list, as stored
    ///
    /// This does not touch the repository; see [`Self::reload_glossaries`].
    pub fn load_glossaries(&self) -> Vec<Glossary> {
        self.ctx.storage.load(GLOSSARIES_KEY, Vec::new())
    }

    /// Load the persisted list and reseed the repository with it
    pub fn reload_glossaries(&self) -> Vec<Glossary> {
        let stored = self.load_glossaries();
        self.ctx.glossary_repository.replace_all(stored.clone());
        log::debug!("Repository reloaded with {} glossaries", stored.len());
        stored
    }

    /// All glossaries
    pub fn get_all_glossaries(&self) -> Vec<Glossary> {
        self.ctx.glossary_repository.get_all()
    }

    /// Glossary by exact name
    pub fn get_glossary(&self, name: &str) -> Option<Glossary> {
        self.ctx.glossary_repository.get_by_name(name)
    }

    /// Rename and/or re-describe a glossary
    ///
    /// When the name changes, the word list is copied to the new storage key
    /// first. If that write is rejected the rename is aborted and nothing
    /// changes; the old key is only dropped once the copy is stored.
    ///
    /// # Errors
    /// * `CoreError::GlossaryNotFound` - `old_name` does not exist
    /// * `CoreError::ValidationError` - the new name is blank or taken
    /// * `CoreError::StorageError` - the word list could not be moved
    pub fn update_glossary(
        &self,
        old_name: &str,
        new_name: &str,
        new_description: &str,
        now: Option<DateTime<Utc>>,
    ) -> CoreResult<Glossary> {
        let new_name = Self::validate_name(new_name)?;
        let renamed = new_name != old_name;
        if renamed {
            if self.ctx.glossary_repository.get_by_name(old_name).is_none() {
                return Err(CoreError::GlossaryNotFound(old_name.to_string()));
            }
            self.ensure_name_available(new_name)?;
            self.copy_words(old_name, new_name)?;
        }

        let glossary = self.ctx.glossary_repository.update(
            old_name,
            new_name,
            new_description.trim(),
            now,
        )?;
        self.persist();

        if renamed {
            self.ctx.storage.remove(&words_key(old_name));
            log::info!("Glossary renamed: {old_name} -> {new_name}");
        }
        Ok(glossary)
    }

    /// Delete a glossary together with its word list
    pub fn delete_glossary(&self, name: &str) -> CoreResult<()> {
        self.ctx.glossary_repository.remove(name)?;
        self.persist();
        self.ctx.storage.remove(&words_key(name));

        log::info!("Glossary deleted: {name}");
        Ok(())
    }

    /// Glossaries whose name contains `search`, case-insensitively
    pub fn search_glossaries(&self, search: &str) -> Vec<Glossary> {
        self.ctx.glossary_repository.filter(search)
    }

    /// Word service for one glossary (a new instance per call)
    pub fn word_service(&self, glossary_name: &str) -> WordService {
        WordService::new(self.ctx.storage.clone(), glossary_name)
    }

    fn persist(&self) {
        self.ctx
            .storage
            .save(GLOSSARIES_KEY, &self.ctx.glossary_repository.get_all());
    }

    fn copy_words(&self, old_name: &str, new_name: &str) -> CoreResult<()> {
        let words: Vec<WordItem> = self.ctx.storage.load(&words_key(old_name), Vec::new());
        if self.ctx.storage.try_save(&words_key(new_name), &words) {
            return Ok(());
        }
        log::warn!("Rename of {old_name} aborted: word list could not be stored");
        Err(CoreError::StorageError(format!(
            "Could not move the words of \"{old_name}\" to \"{new_name}\""
        )))
    }

    fn validate_name(name: &str) -> CoreResult<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError(
                "Glossary name cannot be empty".to_string(),
            ));
        }
        Ok(name)
    }

    fn ensure_name_available(&self, name: &str) -> CoreResult<()> {
        if self.ctx.glossary_repository.get_by_name(name).is_some() {
            return Err(CoreError::ValidationError(format!(
                "A glossary named \"{name}\" already exists"
            )));
        }
        Ok(())
    }
}

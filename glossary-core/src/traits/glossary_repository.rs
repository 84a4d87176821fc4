//! Glossary metadata repository Trait

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::types::{Glossary, NewGlossary};
use crate::utils::contains_ignore_case;

/// Glossary metadata repository
///
/// An in-memory cache of glossary records. It is not durable by itself;
/// `GlossaryService` persists it after every mutation.
pub trait GlossaryRepository: Send + Sync {
    /// Append a new record stamped with `now` (current time when `None`).
    ///
    /// Name collisions are not checked here.
    fn create(&self, data: NewGlossary, now: Option<DateTime<Utc>>) -> Glossary;

    /// Replace name, description and timestamp of the record named `old_name`
    fn update(
        &self,
        old_name: &str,
        new_name: &str,
        new_description: &str,
        now: Option<DateTime<Utc>>,
    ) -> CoreResult<Glossary>;

    /// Delete the record named `name`
    fn remove(&self, name: &str) -> CoreResult<()>;

    /// Snapshot of all records, in insertion order
    fn get_all(&self) -> Vec<Glossary>;

    /// Record by exact name
    fn get_by_name(&self, name: &str) -> Option<Glossary>;

    /// Records whose name contains `search`, case-insensitively
    fn filter(&self, search: &str) -> Vec<Glossary>;

    /// Replace the whole cache (used when reloading from storage)
    fn replace_all(&self, glossaries: Vec<Glossary>);
}

/// In-memory glossary repository
///
/// Default implementation, available on all platforms.
#[derive(Debug, Default)]
pub struct InMemoryGlossaryRepository {
    glossaries: RwLock<Vec<Glossary>>,
}

impl InMemoryGlossaryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with a snapshot (e.g. loaded at startup)
    #[must_use]
    pub fn with_glossaries(initial: Vec<Glossary>) -> Self {
        Self {
            glossaries: RwLock::new(initial),
        }
    }
}

impl GlossaryRepository for InMemoryGlossaryRepository {
    fn create(&self, data: NewGlossary, now: Option<DateTime<Utc>>) -> Glossary {
        let glossary = Glossary::new(data.name, data.description, now.unwrap_or_else(Utc::now));
        self.glossaries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(glossary.clone());
        glossary
    }

    fn update(
        &self,
        old_name: &str,
        new_name: &str,
        new_description: &str,
        now: Option<DateTime<Utc>>,
    ) -> CoreResult<Glossary> {
        let mut glossaries = self
            .glossaries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let slot = glossaries
            .iter_mut()
            .find(|g| g.name == old_name)
            .ok_or_else(|| CoreError::GlossaryNotFound(old_name.to_string()))?;

        *slot = Glossary::new(
            new_name.to_string(),
            new_description.to_string(),
            now.unwrap_or_else(Utc::now),
        );
        Ok(slot.clone())
    }

    fn remove(&self, name: &str) -> CoreResult<()> {
        let mut glossaries = self
            .glossaries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let index = glossaries
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| CoreError::GlossaryNotFound(name.to_string()))?;
        glossaries.remove(index);
        Ok(())
    }

    fn get_all(&self) -> Vec<Glossary> {
        self.glossaries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get_by_name(&self, name: &str) -> Option<Glossary> {
        self.glossaries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|g| g.name == name)
            .cloned()
    }

    fn filter(&self, search: &str) -> Vec<Glossary> {
        self.glossaries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|g| contains_ignore_case(&g.name, search))
            .cloned()
            .collect()
    }

    fn replace_all(&self, glossaries: Vec<Glossary>) {
        *self
            .glossaries
            .write()
            .unwrap_or_else(PoisonError::into_inner) = glossaries;
    }
}

//! Per-glossary word list service

use crate::error::{CoreError, CoreResult};
use crate::storage::{words_key, StorageProvider};
use crate::types::WordItem;
use crate::utils::contains_ignore_case;

/// Word list service bound to one glossary
///
/// Every operation reads the list from storage and every mutation writes the
/// full list back under `glossary_<name>`.
pub struct WordService {
    storage: StorageProvider,
    glossary_name: String,
    storage_key: String,
}

impl WordService {
    /// Create a word service for `glossary_name`
    #[must_use]
    pub fn new(storage: StorageProvider, glossary_name: &str) -> Self {
        Self {
            storage,
            glossary_name: glossary_name.to_string(),
            storage_key: words_key(glossary_name),
        }
    }

    /// Name of the glossary this service is bound to
    pub fn glossary_name(&self) -> &str {
        &self.glossary_name
    }

    /// All words, empty if nothing is stored
    pub fn load_words(&self) -> Vec<WordItem> {
        self.storage.load(&self.storage_key, Vec::new())
    }

    /// Append a word
    ///
    /// Duplicate headwords are allowed; synonyms are normalized.
    pub fn add_word(
        &self,
        word: &str,
        definition: &str,
        synonyms: Vec<String>,
    ) -> CoreResult<WordItem> {
        let item = WordItem::new(word.to_string(), definition.to_string(), synonyms);
        item.validate()?;

        let mut words = self.load_words();
        words.push(item.clone());
        self.storage.save(&self.storage_key, &words);

        log::debug!("[{}] Added word {}", self.glossary_name, item.word);
        Ok(item)
    }

    /// Replace the first entry whose headword is `old_word`, keeping its position
    pub fn update_word(
        &self,
        old_word: &str,
        word: &str,
        definition: &str,
        synonyms: Vec<String>,
    ) -> CoreResult<WordItem> {
        let item = WordItem::new(word.to_string(), definition.to_string(), synonyms);
        item.validate()?;

        let mut words = self.load_words();
        let slot = words
            .iter_mut()
            .find(|w| w.word == old_word)
            .ok_or_else(|| CoreError::WordNotFound(old_word.to_string()))?;
        *slot = item.clone();
        self.storage.save(&self.storage_key, &words);

        Ok(item)
    }

    /// Remove every entry whose headword is exactly `word`
    ///
    /// Removing a missing word is not an error.
    pub fn delete_word(&self, word: &str) {
        let mut words = self.load_words();
        let before = words.len();
        words.retain(|w| w.word != word);
        if words.len() == before {
            log::debug!("[{}] Word {word} not present, nothing to delete", self.glossary_name);
        }
        self.storage.save(&self.storage_key, &words);
    }

    /// First entry with headword `word`
    pub fn get_word(&self, word: &str) -> Option<WordItem> {
        self.load_words().into_iter().find(|w| w.word == word)
    }

    /// Whether an entry with headword `word` exists
    pub fn word_exists(&self, word: &str) -> bool {
        self.load_words().iter().any(|w| w.word == word)
    }

    /// Entries whose headword or definition contains `search`, case-insensitively
    pub fn search_words(&self, search: &str) -> Vec<WordItem> {
        self.load_words()
            .into_iter()
            .filter(|w| {
                contains_ignore_case(&w.word, search) || contains_ignore_case(&w.definition, search)
            })
            .collect()
    }

    /// Overwrite the whole list (used by import)
    ///
    /// Returns `false` when the backend rejected the write.
    pub fn replace_words(&self, words: &[WordItem]) -> bool {
        self.storage.try_save(&self.storage_key, words)
    }

    /// Drop the stored list
    pub fn clear_words(&self) {
        self.storage.remove(&self.storage_key);
    }
}

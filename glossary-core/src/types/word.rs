//! Word entry types

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single glossary entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordItem {
    /// Headword (single token)
    pub word: String,
    /// Definition (non-empty)
    pub definition: String,
    /// Lowercase synonyms, without duplicates and without the headword
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl WordItem {
    /// Builds an entry, normalizing the synonym list.
    #[must_use]
    pub fn new(word: String, definition: String, synonyms: Vec<String>) -> Self {
        let synonyms = normalize_synonyms(&word, synonyms);
        Self {
            word,
            definition,
            synonyms,
        }
    }

    /// Checks the entry rules applied when a user adds or edits a word.
    ///
    /// - `word` is non-empty and contains no whitespace
    /// - `definition` is non-empty after trimming
    pub fn validate(&self) -> CoreResult<()> {
        if self.word.is_empty() {
            return Err(CoreError::ValidationError(
                "Please provide a word".to_string(),
            ));
        }
        if self.word.chars().any(char::is_whitespace) {
            return Err(CoreError::ValidationError(format!(
                "Word \"{}\" must be a single token without spaces",
                self.word
            )));
        }
        if self.definition.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "Please provide a definition for \"{}\"",
                self.word
            )));
        }
        Ok(())
    }
}

/// Case-folds, trims and de-duplicates synonyms.
///
/// Order of first occurrence is kept. Empty entries and entries equal to
/// `word` (case-insensitively) are dropped.
#[must_use]
pub fn normalize_synonyms<I, S>(word: &str, synonyms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let word = word.trim().to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for synonym in synonyms {
        let folded = synonym.as_ref().trim().to_lowercase();
        if folded.is_empty() || folded == word || out.contains(&folded) {
            continue;
        }
        out.push(folded);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_dedups() {
        let out = normalize_synonyms("cat", ["Feline", "kitty", "FELINE", " kitty "]);
        assert_eq!(out, vec!["feline", "kitty"]);
    }

    #[test]
    fn normalize_drops_the_word_itself() {
        let out = normalize_synonyms("Cat", ["cat", "CAT", "tomcat", ""]);
        assert_eq!(out, vec!["tomcat"]);
    }

    #[test]
    fn new_normalizes_synonyms() {
        let item = WordItem::new("dog".into(), "a canine".into(), vec!["Hound".into()]);
        assert_eq!(item.synonyms, vec!["hound"]);
    }

    #[test]
    fn validate_rejects_whitespace_in_word() {
        let item = WordItem::new("ice cream".into(), "cold".into(), vec![]);
        assert!(matches!(item.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn validate_rejects_blank_definition() {
        let item = WordItem::new("ice".into(), "   ".into(), vec![]);
        assert!(matches!(item.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn validate_accepts_well_formed_entry() {
        let item = WordItem::new("ice".into(), "frozen water".into(), vec![]);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn missing_synonyms_deserialize_as_empty() {
        let item: WordItem = serde_json::from_str(r#"{"word":"a","definition":"b"}"#).unwrap();
        assert!(item.synonyms.is_empty());
    }
}

//! Type definition module

mod export;
mod glossary;
mod word;

pub use export::{ExportFormat, ExportedFile, GlossaryExport, SynonymRequest, SynonymResponse};
pub use glossary::{Glossary, NewGlossary};
pub use word::{normalize_synonyms, WordItem};

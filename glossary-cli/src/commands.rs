//! Command execution
//!
//! Every command writes its human-readable output to `out`; errors bubble up
//! to `main` which prints them and sets the exit code.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use glossary_app::AppState;
use glossary_core::types::{ExportFormat, Glossary, WordItem};
use glossary_core::{CoreError, CoreResult};

use crate::cli::Command;

pub async fn run(state: &AppState, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List { search } => {
            let glossaries = match search.as_deref() {
                Some(term) => state.glossary_service.search_glossaries(term),
                None => state.glossary_service.get_all_glossaries(),
            };
            if glossaries.is_empty() {
                writeln!(out, "No glossaries")?;
            }
            for glossary in &glossaries {
                let count = state.word_service(&glossary.name).load_words().len();
                writeln!(out, "{}", format_glossary(glossary, count))?;
            }
        }

        Command::Create { name, description } => {
            let glossary = state
                .glossary_service
                .create_glossary(&name, &description, None)?;
            writeln!(out, "Created glossary \"{}\"", glossary.name)?;
        }

        Command::Rename {
            name,
            new_name,
            description,
        } => {
            let current = require_glossary(state, &name)?;
            let description = description.unwrap_or(current.description);
            let glossary = state
                .glossary_service
                .update_glossary(&name, &new_name, &description, None)?;
            writeln!(out, "Updated glossary \"{}\"", glossary.name)?;
        }

        Command::Delete { name } => {
            state.glossary_service.delete_glossary(&name)?;
            writeln!(out, "Deleted glossary \"{name}\"")?;
        }

        Command::Words { glossary, search } => {
            require_glossary(state, &glossary)?;
            let words = state.word_service(&glossary);
            let items = match search.as_deref() {
                Some(term) => words.search_words(term),
                None => words.load_words(),
            };
            if items.is_empty() {
                writeln!(out, "No words")?;
            }
            for item in &items {
                writeln!(out, "{}", format_word(item))?;
            }
        }

        Command::AddWord {
            glossary,
            word,
            definition,
            synonyms,
        } => {
            require_glossary(state, &glossary)?;
            let item = state
                .word_service(&glossary)
                .add_word(&word, &definition, synonyms)?;
            writeln!(out, "Added {}", format_word(&item))?;
        }

        Command::UpdateWord {
            glossary,
            word,
            new_word,
            definition,
            synonyms,
        } => {
            require_glossary(state, &glossary)?;
            let words = state.word_service(&glossary);
            let current = words
                .get_word(&word)
                .ok_or_else(|| CoreError::WordNotFound(word.clone()))?;
            let item = words.update_word(
                &word,
                new_word.as_deref().unwrap_or(&current.word),
                definition.as_deref().unwrap_or(&current.definition),
                synonyms.unwrap_or(current.synonyms),
            )?;
            writeln!(out, "Updated {}", format_word(&item))?;
        }

        Command::DeleteWord { glossary, word } => {
            require_glossary(state, &glossary)?;
            state.word_service(&glossary).delete_word(&word);
            writeln!(out, "Deleted \"{word}\" from \"{glossary}\"")?;
        }

        Command::Export {
            glossary,
            format,
            out: destination,
        } => {
            let file = state
                .import_export_service
                .export_glossary(&glossary, format.into())?;
            let saved = match destination {
                Some(path) => {
                    std::fs::write(&path, &file.content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    Some(path)
                }
                None => state.downloader.download_export(&file)?,
            };
            match saved {
                Some(path) => writeln!(out, "Exported \"{glossary}\" to {}", path.display())?,
                None => writeln!(out, "Export cancelled")?,
            }
        }

        Command::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let file_name = file_name_of(&file);
            let glossary = state
                .import_export_service
                .import_glossary(&file_name, &content, None)?;
            let count = state.word_service(&glossary.name).load_words().len();
            writeln!(
                out,
                "Imported glossary \"{}\" ({count} words)",
                glossary.name
            )?;
        }

        Command::Suggest {
            glossary,
            word,
            apply,
        } => {
            require_glossary(state, &glossary)?;
            let words = state.word_service(&glossary);
            let item = words
                .get_word(&word)
                .ok_or_else(|| CoreError::WordNotFound(word.clone()))?;
            let suggestions = state
                .synonym_service
                .suggest(&item.word, &item.definition, &item.synonyms)
                .await?;

            if suggestions.is_empty() {
                writeln!(out, "No new synonyms for \"{word}\"")?;
                return Ok(());
            }
            writeln!(out, "Suggestions: {}", suggestions.join(", "))?;

            if apply {
                let mut synonyms = item.synonyms.clone();
                synonyms.extend(suggestions);
                let updated =
                    words.update_word(&item.word, &item.word, &item.definition, synonyms)?;
                writeln!(out, "Updated {}", format_word(&updated))?;
            }
        }

        Command::Push {
            glossary,
            save_on_failure,
        } => match state.export_words_remote(&glossary).await {
            Ok(response) => {
                writeln!(out, "Pushed \"{glossary}\"")?;
                if !response.is_null() {
                    writeln!(out, "{response}")?;
                }
            }
            Err(e) if save_on_failure && !matches!(e, CoreError::GlossaryNotFound(_)) => {
                tracing::warn!("Push of {glossary} failed: {e}");
                let file = state
                    .import_export_service
                    .export_glossary(&glossary, ExportFormat::Json)?;
                if let Some(path) = state.downloader.download_export(&file)? {
                    writeln!(out, "Push failed ({e}); saved {}", path.display())?;
                }
            }
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

fn require_glossary(state: &AppState, name: &str) -> CoreResult<Glossary> {
    state
        .glossary_service
        .get_glossary(name)
        .ok_or_else(|| CoreError::GlossaryNotFound(name.to_string()))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn format_glossary(glossary: &Glossary, word_count: usize) -> String {
    let modified = glossary.last_modified_at().map_or_else(
        || glossary.last_modified.clone(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    );
    let mut line = format!("{}  ({word_count} words, modified {modified})", glossary.name);
    if !glossary.description.is_empty() {
        line.push_str(" - ");
        line.push_str(&glossary.description);
    }
    line
}

fn format_word(item: &WordItem) -> String {
    if item.synonyms.is_empty() {
        format!("{}: {}", item.word, item.definition)
    } else {
        format!(
            "{}: {} [{}]",
            item.word,
            item.definition,
            item.synonyms.join(", ")
        )
    }
}

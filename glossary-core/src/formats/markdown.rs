//! Markdown table format
//!
//! ```text
//! # <name>
//! ### <description | "Glossary">
//!
//! | Word | Definition | Synonyms |
//! | --- | --- | --- |
//! | cat | a feline | feline, kitty |
//! ```

use std::fmt::Write;

use crate::error::{CoreError, CoreResult};
use crate::types::{GlossaryExport, WordItem};

/// Name used when the document has no H1 heading
const DEFAULT_NAME: &str = "Imported Glossary";
/// Subtitle written when there is no description; never read back as one
const PLACEHOLDER_DESCRIPTION: &str = "Glossary";
/// Synonym cell for an empty list
const NO_SYNONYMS: &str = "_None_";
/// French variant accepted on import
const NO_SYNONYMS_FR: &str = "_Aucun_";

/// Render a glossary as a Markdown table
#[must_use]
pub fn export_to_markdown(glossary: &GlossaryExport) -> String {
    let mut out = String::new();
    let description = glossary
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(PLACEHOLDER_DESCRIPTION);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}", glossary.name);
    let _ = writeln!(out, "### {description}");
    out.push('\n');
    out.push_str("| Word | Definition | Synonyms |\n");
    out.push_str("| --- | --- | --- |\n");

    for item in &glossary.words {
        let synonyms = if item.synonyms.is_empty() {
            NO_SYNONYMS.to_string()
        } else {
            item.synonyms.join(", ")
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            escape_cell(&item.word),
            escape_cell(&item.definition),
            escape_cell(&synonyms)
        );
    }

    out
}

/// Parse a Markdown glossary
///
/// # Errors
/// `CoreError::NoWordsFound` when no table row yields a word.
pub fn import_from_markdown(input: &str) -> CoreResult<GlossaryExport> {
    let name = input
        .lines()
        .find_map(|line| heading_text(line, "#"))
        .unwrap_or(DEFAULT_NAME)
        .to_string();

    let description = input
        .lines()
        .find_map(|line| heading_text(line, "###"))
        .filter(|d| *d != PLACEHOLDER_DESCRIPTION)
        .map(str::to_string);

    let mut words = Vec::new();
    let mut in_table = false;

    for line in input.lines() {
        let line = line.trim();

        if line.starts_with("| Word") || line.starts_with("| Mot") {
            in_table = true;
            continue;
        }
        if line.starts_with("| ---") {
            continue;
        }
        if !in_table || !line.starts_with('|') {
            continue;
        }

        let cells: Vec<String> = split_unescaped(line)
            .into_iter()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| c.replace("\\|", "|"))
            .collect();

        if let [word, definition, synonyms, ..] = cells.as_slice() {
            words.push(WordItem {
                word: word.clone(),
                definition: definition.clone(),
                synonyms: parse_synonyms(synonyms),
            });
        }
    }

    if words.is_empty() {
        return Err(CoreError::NoWordsFound);
    }

    Ok(GlossaryExport {
        name,
        description,
        words,
    })
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Text of a heading with exactly the given marker (`#` does not match `###`).
fn heading_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// Split on `|` not directly preceded by a backslash.
fn split_unescaped(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev = None;
    for (i, c) in line.char_indices() {
        if c == '|' && prev != Some('\\') {
            parts.push(&line[start..i]);
            start = i + c.len_utf8();
        }
        prev = Some(c);
    }
    parts.push(&line[start..]);
    parts
}

fn parse_synonyms(text: &str) -> Vec<String> {
    if text.is_empty() || text == NO_SYNONYMS || text == NO_SYNONYMS_FR {
        return Vec::new();
    }
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

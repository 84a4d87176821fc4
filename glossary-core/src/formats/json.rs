//! JSON format

use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};
use crate::types::{GlossaryExport, WordItem};

/// Pretty-printed (2-space indent) `{ name, description?, words }`
pub fn export_to_json(glossary: &GlossaryExport) -> CoreResult<String> {
    serde_json::to_string_pretty(glossary).map_err(|e| CoreError::SerializationError(e.to_string()))
}

/// Parse and validate a JSON export
///
/// # Errors
/// * `CoreError::InvalidJson` - the document is not JSON
/// * `CoreError::ValidationError` - a required field is missing or has the
///   wrong type; word errors carry the 1-based word index
pub fn import_from_json(input: &str) -> CoreResult<GlossaryExport> {
    let data: Value =
        serde_json::from_str(input).map_err(|e| CoreError::InvalidJson(e.to_string()))?;

    let name = match data.get("name") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => {
            return Err(CoreError::ValidationError(
                "Glossary must contain a \"name\" field (string)".to_string(),
            ))
        }
    };

    let Some(Value::Array(raw_words)) = data.get("words") else {
        return Err(CoreError::ValidationError(
            "Glossary must contain a \"words\" field (array)".to_string(),
        ));
    };

    let description = data
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    let words = raw_words
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_word(i + 1, raw))
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(GlossaryExport {
        name,
        description,
        words,
    })
}

fn parse_word(index: usize, raw: &Value) -> CoreResult<WordItem> {
    let Some(fields) = raw.as_object() else {
        return Err(CoreError::ValidationError(format!(
            "Word {index}: the \"word\" field is required (string)"
        )));
    };

    let word = required_string(fields, "word", index)?;
    let definition = required_string(fields, "definition", index)?;
    let Some(Value::Array(raw_synonyms)) = fields.get("synonyms") else {
        return Err(CoreError::ValidationError(format!(
            "Word {index}: the \"synonyms\" field must be an array"
        )));
    };

    // Elements are not type-checked; non-strings keep their JSON text.
    let synonyms = raw_synonyms
        .iter()
        .map(|s| match s {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    Ok(WordItem {
        word,
        definition,
        synonyms,
    })
}

fn required_string(fields: &Map<String, Value>, field: &str, index: usize) -> CoreResult<String> {
    match fields.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(CoreError::ValidationError(format!(
            "Word {index}: the \"{field}\" field is required (string)"
        ))),
    }
}

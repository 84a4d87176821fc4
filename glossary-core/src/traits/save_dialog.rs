//! Native save-dialog bridge Trait

use std::path::PathBuf;

use crate::error::CoreResult;

/// File type filter shown by a save dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Display name, e.g. "JSON"
    pub name: String,
    /// Extensions without dot
    pub extensions: Vec<String>,
}

impl FileFilter {
    /// Filter matching a MIME type produced by an export.
    #[must_use]
    pub fn for_mime_type(mime_type: &str) -> Self {
        if mime_type == "application/json" {
            Self {
                name: "JSON".to_string(),
                extensions: vec!["json".to_string()],
            }
        } else {
            Self {
                name: "Markdown".to_string(),
                extensions: vec!["md".to_string()],
            }
        }
    }
}

/// Lets the user pick where a file is written
///
/// Only present when running inside a native shell.
pub trait SaveDialog: Send + Sync {
    /// Ask for a destination path
    ///
    /// # Returns
    /// * `Ok(Some(path))` - the user chose a path
    /// * `Ok(None)` - the user cancelled
    /// * `Err(_)` - the dialog is unavailable
    fn pick_save_path(
        &self,
        default_name: &str,
        filter: &FileFilter,
    ) -> CoreResult<Option<PathBuf>>;
}

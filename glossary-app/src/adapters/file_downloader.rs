//! Export file delivery
//!
//! Asks a native save dialog for the destination when one is available and
//! otherwise drops the file into the downloads directory, browser style
//! (`name.json`, `name (1).json`, ...).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glossary_core::traits::{FileFilter, SaveDialog};
use glossary_core::types::ExportedFile;
use glossary_core::CoreResult;

/// Writes exported content to disk
pub struct FileDownloader {
    dialog: Option<Arc<dyn SaveDialog>>,
    fallback_dir: PathBuf,
}

impl FileDownloader {
    #[must_use]
    pub fn new(fallback_dir: impl Into<PathBuf>) -> Self {
        Self {
            dialog: None,
            fallback_dir: fallback_dir.into(),
        }
    }

    #[must_use]
    pub fn with_dialog(mut self, dialog: Arc<dyn SaveDialog>) -> Self {
        self.dialog = Some(dialog);
        self
    }

    pub fn fallback_dir(&self) -> &Path {
        &self.fallback_dir
    }

    /// Save `content` under `filename`
    ///
    /// # Returns
    /// * `Ok(Some(path))` - where the file was written
    /// * `Ok(None)` - the user cancelled the save dialog
    ///
    /// # Errors
    /// `CoreError::IoError` if the destination cannot be written.
    pub fn download(
        &self,
        content: &str,
        filename: &str,
        mime_type: &str,
    ) -> CoreResult<Option<PathBuf>> {
        if let Some(dialog) = &self.dialog {
            let filter = FileFilter::for_mime_type(mime_type);
            match dialog.pick_save_path(filename, &filter) {
                Ok(Some(path)) => return write_file(&path, content).map(Some),
                Ok(None) => {
                    log::info!("Save of {filename} cancelled");
                    return Ok(None);
                }
                Err(e) => {
                    log::warn!("Save dialog unavailable ({e}), falling back to downloads dir");
                }
            }
        }

        let path = unique_path(&self.fallback_dir, filename);
        write_file(&path, content).map(Some)
    }

    /// Save the output of an export
    pub fn download_export(&self, file: &ExportedFile) -> CoreResult<Option<PathBuf>> {
        self.download(&file.content, &file.suggested_filename, &file.mime_type)
    }
}

fn write_file(path: &Path, content: &str) -> CoreResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::info!("Saved {}", path.display());
    Ok(path.to_path_buf())
}

/// First free `dir/filename`, numbering duplicates like a browser download
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };
    (1u32..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

//! Application configuration
//!
//! Read from `config.json` in the platform config directory
//! (`~/.config/glossary-manager` on Linux). Every key is optional.
//!
//! Environment overrides:
//! - `GLOSSARY_DATA_DIR` - directory holding the storage file
//! - `GLOSSARY_API_URL` - base URL of the synonym / export backend
//! - `GLOSSARY_TIMEOUT_SECS` - request time budget in seconds

use std::path::{Path, PathBuf};
use std::time::Duration;

use glossary_core::services::DEFAULT_DEBOUNCE;
use glossary_core::traits::DEFAULT_TIMEOUT;
use glossary_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "glossary-manager";
const CONFIG_FILE_NAME: &str = "config.json";
const STORE_FILE_NAME: &str = "storage.json";

/// Same order of magnitude as a browser origin's local storage allowance
pub const DEFAULT_STORAGE_QUOTA: u64 = 5 * 1024 * 1024;

pub const ENV_DATA_DIR: &str = "GLOSSARY_DATA_DIR";
pub const ENV_API_URL: &str = "GLOSSARY_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "GLOSSARY_TIMEOUT_SECS";

/// Platform config directory for the application
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding `storage.json`
    pub data_dir: PathBuf,
    /// Fallback destination for exported files
    pub download_dir: PathBuf,
    /// Backend base URL, e.g. `http://127.0.0.1:8000`
    pub api_base_url: String,
    /// Path of the synonym suggestion endpoint
    pub synonym_path: String,
    /// Path of the word export endpoint
    pub export_path: String,
    pub request_timeout_secs: u64,
    pub debounce_millis: u64,
    /// Byte limit of the storage file, `null` for unlimited
    pub storage_quota_bytes: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: config_dir(),
            download_dir: dirs::download_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            api_base_url: "http://127.0.0.1:8000".to_string(),
            synonym_path: "/synonym/getSynonym".to_string(),
            export_path: "/api/words".to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            debounce_millis: u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(400),
            storage_quota_bytes: Some(DEFAULT_STORAGE_QUOTA),
        }
    }
}

impl AppConfig {
    /// Load `config.json` from the platform config dir, then apply environment overrides
    pub fn load() -> Self {
        let mut config = Self::load_from(&config_dir().join(CONFIG_FILE_NAME));
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load a config file, falling back to defaults when it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read config {}: {e}", path.display());
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Invalid config {}: {e}, using defaults", path.display());
            Self::default()
        })
    }

    /// Write the configuration as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from a variable lookup (the process environment in [`Self::load`])
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => log::warn!("Ignoring invalid {ENV_TIMEOUT_SECS}={raw}"),
            }
        }
    }

    /// Location of the key-value storage file
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn synonym_url(&self) -> String {
        self.endpoint(&self.synonym_path)
    }

    pub fn export_url(&self) -> String {
        self.endpoint(&self.export_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_millis)
    }

    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "index-viewer.json";
pub const DEFAULT_CSV_URL: &str =
    "https://raw.githubusercontent.com/shaktids/stock_app_test/refs/heads/main/dump.csv";
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Runtime settings, read from an optional JSON file.
///
/// ```json
/// { "csv_url": "https://…/dump.csv", "page_size": 10, "request_timeout_secs": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// CSV fetched at startup and on reload.
    pub csv_url: String,
    /// Index names shown per page.
    pub page_size: usize,
    /// HTTP timeout; `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_CSV_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: None,
            user_agent: concat!("index-viewer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ViewerConfig = serde_json::from_str(text).context("parsing config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading {}", path.display()))
    }

    /// Load `path` if it exists, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be greater than zero");
        }
        if self.csv_url.trim().is_empty() {
            bail!("csv_url must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn partial_override() {
        let config =
            ViewerConfig::from_json(r#"{ "page_size": 25, "request_timeout_secs": 15 }"#).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.csv_url, DEFAULT_CSV_URL);
    }

    #[test]
    fn zero_page_size_rejected() {
        let err = ViewerConfig::from_json(r#"{ "page_size": 0 }"#).unwrap_err();
        assert!(format!("{err:#}").contains("page_size"));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(ViewerConfig::load_or_default(&path), ViewerConfig::default());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "csv_url": "http://localhost/x.csv" }"#).unwrap();
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.csv_url, "http://localhost/x.csv");
    }
}

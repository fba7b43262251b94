//! Shell configuration, read once at startup from `./feed.ron`.

use std::path::Path;

use feed_logging::feed_warn;
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "feed.ron";

/// Everything has a usable default so a missing file still boots the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    /// Search API key; external configuration only, never hardcoded.
    pub api_key: String,
    pub search_text: String,
    /// Logical viewport width, read exactly once at mount.
    pub viewport_width: f32,
    pub cells_per_row: usize,
    /// Update-channel manifest endpoint; absent disables update checks.
    pub manifest_url: Option<String>,
    pub installed_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_text: "cat".to_string(),
            viewport_width: 360.0,
            cells_per_row: 2,
            manifest_url: None,
            installed_label: "v1".to_string(),
        }
    }
}

pub(crate) fn load(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let mut config = match std::fs::read_to_string(&path) {
        Ok(content) => match ron::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                feed_warn!("Failed to parse config from {:?}: {}", path, err);
                AppConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(err) => {
            feed_warn!("Failed to read config from {:?}: {}", path, err);
            AppConfig::default()
        }
    };

    if config.api_key.is_empty() {
        if let Ok(key) = std::env::var("FLICKR_API_KEY") {
            config.api_key = key;
        }
    }
    config
}

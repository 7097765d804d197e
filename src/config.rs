use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATA_ENV: &str = "LISTING_SCOUT_DATA";
pub const STORAGE_ENV: &str = "LISTING_SCOUT_STORAGE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File path or http(s) URL of the listings document
    pub data_source: String,
    /// Directory holding the favorites slot
    pub storage_dir: PathBuf,
    /// How many featured listings the home view shows
    pub featured_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: "data/properties.json".into(),
            storage_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("listing-scout"),
            featured_limit: 3,
        }
    }
}

impl Config {
    /// Defaults, then the config file if present, then environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("listing-scout").join("config.json"))
    }

    fn apply_env(&mut self) {
        if let Ok(data) = std::env::var(DATA_ENV) {
            self.data_source = data;
        }
        if let Ok(dir) = std::env::var(STORAGE_ENV) {
            self.storage_dir = PathBuf::from(dir);
        }
    }
}

//! Configuration file handling for the CLI.
//!
//! Reads `config.toml` from the platform config directory, e.g.
//! `$XDG_CONFIG_HOME/ymbank/config.toml` on Linux.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Deserialize;
use ymbank_business::{BusinessConfig, DEFAULT_API_BASE_URL};

/// CLI configuration stored on disk
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Banking API configuration
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/v1` suffix
    pub base_url: Option<String>,
}

impl Config {
    /// `<config dir>/ymbank/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
        Ok(config_dir.join("ymbank").join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolve the API base URL: command line or environment first, then this file, then the
    /// built-in default.
    pub fn business_config(&self, override_url: Option<&str>) -> BusinessConfig {
        let base_url = override_url
            .or(self.api.base_url.as_deref())
            .unwrap_or(DEFAULT_API_BASE_URL);
        BusinessConfig::new(base_url)
    }
}

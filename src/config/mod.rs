// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use prompt_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.request_timeout_secs = Some(60);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.request_timeout_secs, Some(60));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{
    DEFAULT_API_BASE_URL, DEFAULT_EDIT_MODEL, DEFAULT_PROMPT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PromptLens";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub edit_model: Option<String>,
    #[serde(default)]
    pub prompt_model: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Where exports go when the platform has no download directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            edit_model: Some(DEFAULT_EDIT_MODEL.to_string()),
            prompt_model: Some(DEFAULT_PROMPT_MODEL.to_string()),
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            export_dir: None,
        }
    }
}

impl Config {
    pub fn edit_model(&self) -> &str {
        self.edit_model.as_deref().unwrap_or(DEFAULT_EDIT_MODEL)
    }

    pub fn prompt_model(&self) -> &str {
        self.prompt_model.as_deref().unwrap_or(DEFAULT_PROMPT_MODEL)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
    }

    /// Request timeout, clamped to the supported range.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(
                defaults::MIN_REQUEST_TIMEOUT_SECS,
                defaults::MAX_REQUEST_TIMEOUT_SECS,
            );
        Duration::from_secs(secs)
    }

    /// Resolves the API key: environment first, then the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no non-empty key is available.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, env: impl Fn(&str) -> Option<String>) -> Result<String> {
        defaults::API_KEY_ENV_VARS
            .iter()
            .find_map(|name| env(name).filter(|value| !value.trim().is_empty()))
            .or_else(|| self.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "API key not set (use {} or api_key in {CONFIG_FILE})",
                    defaults::API_KEY_ENV_VARS.join(" / ")
                ))
            })
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid {}: {err}", path.display());
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

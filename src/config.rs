//! Configuration loading and management for notesum.
//!
//! Loads settings from `notesum.toml` with environment variable overrides for
//! the default method and length.

use crate::summarizer::{Limits, MIN_BULLET_WIDTH};
use crate::summary::{Length, Method, SummaryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const CONFIG_FILE: &str = "notesum.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid environment override: {0}")]
    InvalidOverride(#[from] SummaryError),
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    #[error("failed to render config: {0}")]
    RenderError(#[from] toml::ser::Error),
}

/// Default summary settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// "extractive", "bullet_points" or "key_terms"
    pub method: Method,
    /// "short", "medium" or "long"
    pub length: Length,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub summary: SummaryConfig,
    pub limits: Limits,
}

impl Config {
    /// Load configuration from the default location (notesum.toml in cwd or home).
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::read(&path)?,
            None => {
                info!("no {} found, using defaults", CONFIG_FILE);
                Config::default()
            }
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read(path)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.bullet_width < MIN_BULLET_WIDTH {
            return Err(ConfigError::InvalidLimit(format!(
                "bullet_width must be at least {}, got {}",
                MIN_BULLET_WIDTH, self.limits.bullet_width
            )));
        }
        Ok(())
    }

    /// Render the configuration back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "reading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Override the defaults from NOTESUM_METHOD and NOTESUM_LENGTH
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(
            std::env::var("NOTESUM_METHOD").ok().as_deref(),
            std::env::var("NOTESUM_LENGTH").ok().as_deref(),
        )
    }

    fn apply_overrides(
        &mut self,
        method: Option<&str>,
        length: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(method) = method {
            self.summary.method = method.parse()?;
        }
        if let Some(length) = length {
            self.summary.length = length.parse()?;
        }
        Ok(())
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        let home_config = dirs::home_dir()?
            .join(".config")
            .join("notesum")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }
}

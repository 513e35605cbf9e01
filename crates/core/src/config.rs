//! Application configuration handling.
//!
//! Settings live in `<config_dir>/busfleet/config.toml`; a commented
//! default file is written on first run. A missing file is not an
//! error, the defaults apply.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::MAX_BUSES;

/// Rows per page of the fleet listing when nothing is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Largest accepted `page_size`; a page never needs more rows than the
/// largest fleet.
pub const MAX_PAGE_SIZE: usize = MAX_BUSES;

const DEFAULT_CONFIG: &str = "\
# busfleet configuration.

# Rows per page of the fleet listing (1-50).
page_size = 5

# Set to false to disable colored output.
use_colors = true
";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Location of the offending file.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: config::ConfigError,
    },
    /// The file was read but is not valid configuration.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        /// Location of the offending file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: config::ConfigError,
    },
    /// The file parsed but a value is out of range.
    #[error("config validation failed: {message}")]
    Validation {
        /// Human-readable description of the rejected value.
        message: String,
    },
}

/// User-tunable settings for the console frontend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rows per page of the fleet listing.
    pub page_size: usize,
    /// Whether diagnostics and tables use color.
    pub use_colors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            use_colors: true,
        }
    }
}

/// Location of the configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("busfleet")
        .join("config.toml")
}

/// Write the commented default configuration if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    let path = config_path();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}

impl AppConfig {
    /// Load settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_path())
    }

    /// Load settings from an explicit file.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path.clone()))
            .build()
            .map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
        let loaded: Self = settings
            .try_deserialize()
            .map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::Validation {
                message: format!(
                    "page_size {} outside 1..={MAX_PAGE_SIZE}",
                    self.page_size
                ),
            });
        }
        Ok(())
    }
}

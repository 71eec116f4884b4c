//! Configuration for rendering shadow models
//!
//! Loaded from TOML. Every key has a default, so an empty file (or no file
//! at all) yields the stock banner.
//!
//! ```toml
//! models = "assets.json"
//!
//! [banner]
//! brief = "This file contains general information."
//! stem = "Info"
//! extension = "log"
//! ```

use crate::error::{Result, ShadowError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the generated-file banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_brief")]
    pub brief: String,
    #[serde(default = "default_warning")]
    pub warning: String,
    /// Last segment of the file name before the extension
    #[serde(default = "default_stem")]
    pub stem: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_brief() -> String {
    "This file contains general information.".to_string()
}

fn default_warning() -> String {
    "Warning! This is a generated file. Manual changes will be omitted.".to_string()
}

fn default_stem() -> String {
    "Info".to_string()
}

fn default_extension() -> String {
    "log".to_string()
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            brief: default_brief(),
            warning: default_warning(),
            stem: default_stem(),
            extension: default_extension(),
        }
    }
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,
    /// Default model file for the CLI
    #[serde(default)]
    pub models: Option<PathBuf>,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| ShadowError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Like [`load`](Self::load), falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.banner.stem.is_empty() {
            return Err(ShadowError::ConfigError(
                "banner.stem must not be empty".to_string(),
            ));
        }
        if self.banner.extension.starts_with('.') {
            return Err(ShadowError::ConfigError(format!(
                "banner.extension must not start with '.': {}",
                self.banner.extension
            )));
        }
        Ok(())
    }
}

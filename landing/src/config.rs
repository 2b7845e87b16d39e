//! Configuration file support for the page writer.
//!
//! Loads an optional `landing.toml`. Every key is optional:
//!
//! ```toml
//! out_dir = "dist"
//! file_name = "index.html"
//! log_level = "info"
//! ```
//!
//! Command-line flags take precedence over file values, which take
//! precedence over the defaults.

use crate::error::{LandingError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "landing.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// Directory the rendered page is written into
    pub out_dir: PathBuf,
    /// File name of the rendered page inside `out_dir`
    pub file_name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            file_name: "index.html".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub out_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub log_level: Option<String>,
}

impl LandingConfig {
    /// Load config from a specific path.
    ///
    /// A missing file yields `Ok(None)`; a file that exists but cannot be
    /// read or parsed is an error.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| LandingError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| LandingError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(out_dir) = overrides.out_dir {
            self.out_dir = out_dir;
        }
        if let Some(file_name) = overrides.file_name {
            self.file_name = file_name;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }

    /// Full path of the rendered page.
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}

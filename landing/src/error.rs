//! Errors raised while loading configuration or writing the rendered page.
//!
//! Rendering itself cannot fail; only the delivery around it touches the
//! filesystem.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize content")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LandingError>;

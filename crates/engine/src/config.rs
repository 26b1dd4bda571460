//! Store configuration via an optional `roost.toml`
//!
//! The only store setting is where the document lives. Missing keys take
//! their defaults, so an empty file is a valid configuration.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use roost_core::{Error, Result};

/// Document file name used when nothing else is configured.
pub const DEFAULT_DOCUMENT: &str = "file.json";

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "roost.toml";

/// Object store configuration.
///
/// # Example
///
/// ```toml
/// # Path of the persisted document (default: "file.json")
/// document = "data/file.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the persisted document.
    #[serde(default = "default_document")]
    pub document: PathBuf,
}

fn default_document() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
        }
    }
}

impl StoreConfig {
    /// Configuration persisting to `document`.
    pub fn with_document(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        read_toml(path)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_toml(content)
    }
}

/// Parse any config section from TOML text.
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}

/// Read a TOML config file. Errors name the file.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_toml(&content).map_err(|e| match e {
        Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

//! Console configuration.
//!
//! ```toml
//! # tracing filter directive (default: "warn"; ROOST_LOG wins)
//! log = "roost_engine=debug"
//! # where the store document lives (default: "file.json")
//! document = "data/file.json"
//! ```

use std::path::{Path, PathBuf};

use roost_core::Result;
use roost_engine::{parse_toml, read_toml, StoreConfig, CONFIG_FILE_NAME};
use serde::{Deserialize, Serialize};

/// Log filter used when neither the config nor `ROOST_LOG` sets one.
pub const DEFAULT_LOG: &str = "warn";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "ROOST_LOG";

/// Everything the binary reads from `roost.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tracing filter directive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,

    /// Store settings, at the top level of the file.
    #[serde(flatten)]
    pub store: StoreConfig,
}

impl CliConfig {
    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_toml(content)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        read_toml(path)
    }

    /// Load `explicit` if given, else `./roost.toml` if it exists, else
    /// defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::from_file(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Filter directive to use when `ROOST_LOG` is unset.
    pub fn log_filter(&self, verbose: bool) -> &str {
        if verbose {
            "debug"
        } else {
            self.log.as_deref().unwrap_or(DEFAULT_LOG)
        }
    }
}

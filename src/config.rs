//! Configuration file loading and validation.
//!
//! A config file is a JSON document naming the folders to audit:
//!
//! ```json
//! { "folders": ["/mnt/server1/logs", "/mnt/server2/logs"] }
//! ```
//!
//! Folders loaded from a config file are appended after any folders given
//! directly on the command line.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk configuration: the list of folders to audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder paths to scan, in report order
    pub folders: Vec<PathBuf>,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "failed to open config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::configuration(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!(
            "Loaded {} folder(s) from config file {}",
            config.folders.len(),
            path.display()
        );

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.folders.is_empty() {
            return Err(Error::configuration("no folders specified in config file"));
        }
        Ok(())
    }
}

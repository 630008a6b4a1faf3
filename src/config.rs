//! Run configuration.
//!
//! The defaults reproduce the fixed input/output locations; a JSON file and
//! command-line flags can override them.

use crate::error::{EtlError, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "Sleep_health_and_lifestyle_dataset.csv";
pub const DEFAULT_OUTPUT: &str = "clean_sleep.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EtlConfig {
    /// Raw CSV to read.
    pub input: PathBuf,

    /// Cleaned CSV to write (supports `{date}` substitution).
    pub output: PathBuf,

    /// Optional JSON copy of the console summary.
    pub summary_json: Option<PathBuf>,

    /// Directory for rotated log files; console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            summary_json: None,
            log_dir: None,
        }
    }
}

impl EtlConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| EtlError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Output path with `{date}` expanded to today's local date.
    pub fn output_path(&self) -> PathBuf {
        let template = self.output.to_string_lossy();
        if !template.contains("{date}") {
            return self.output.clone();
        }
        let today = Local::now().format("%Y-%m-%d").to_string();
        PathBuf::from(template.replace("{date}", &today))
    }
}

//! Configuration
//!
//! Optional JSON config carrying the revisable tier thresholds and the
//! default report output path. Absent file or absent keys fall back to the
//! built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::Thresholds;

pub const DEFAULT_CONFIG_PATH: &str = ".medeco.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Score thresholds separating the three recommendation tiers.
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Default path for exported reports.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            report_path: default_report_path(),
        }
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from("medeco-report.txt")
}

impl Config {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location or fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_default()
    }
}

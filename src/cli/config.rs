//! Configuration file
//!
//! Optional JSON file naming the data files and the log level. Every field
//! has a default, so `{}` is a valid configuration. Command-line paths
//! override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// NEO catalog CSV (default "data/neos.csv")
    #[serde(default = "default_neo_path")]
    pub neo_path: PathBuf,

    /// Close-approach JSON (default "data/cad.json")
    #[serde(default = "default_cad_path")]
    pub cad_path: PathBuf,

    /// Minimum log severity: trace, info, warn, error or fatal (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_path: default_neo_path(),
            cad_path: default_cad_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration: file (or defaults), then overrides.
    pub fn resolve(
        path: Option<&Path>,
        neo_path: Option<PathBuf>,
        cad_path: Option<PathBuf>,
    ) -> CliResult<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };

        if let Some(p) = neo_path {
            config.neo_path = p;
        }
        if let Some(p) = cad_path {
            config.cad_path = p;
        }

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.log_severity()?;

        if self.neo_path.as_os_str().is_empty() {
            return Err(CliError::config_error("neo_path must not be empty"));
        }
        if self.cad_path.as_os_str().is_empty() {
            return Err(CliError::config_error("cad_path must not be empty"));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}

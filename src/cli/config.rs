//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {"log_level": "warn", "coinc_search": "inspiral", "coinc_search_coinc_type": 3}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ligolw::CoincDef;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum log severity (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Search name of the sim <--> coinc definition to join (default "inspiral")
    #[serde(default = "default_coinc_search")]
    pub coinc_search: String,

    /// Search coinc type of that definition (default 3, exact matches)
    #[serde(default = "default_coinc_search_coinc_type")]
    pub coinc_search_coinc_type: i64,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_coinc_search() -> String {
    "inspiral".to_string()
}
fn default_coinc_search_coinc_type() -> i64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            coinc_search: default_coinc_search(),
            coinc_search_coinc_type: default_coinc_search_coinc_type(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.severity()?;

        if self.coinc_search.trim().is_empty() {
            return Err(CliError::config_error("coinc_search must not be empty"));
        }

        if self.coinc_search_coinc_type < 0 {
            return Err(CliError::config_error("coinc_search_coinc_type must be >= 0"));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(|e: String| CliError::config_error(e))
    }

    /// The coincidence definition the injections command joins on
    pub fn coinc_def(&self) -> CoincDef {
        let exact = CoincDef::inspiral_sc_exact();
        if self.coinc_search == exact.search && self.coinc_search_coinc_type == exact.search_coinc_type {
            return exact;
        }
        CoincDef::new(&self.coinc_search, self.coinc_search_coinc_type, "")
    }
}

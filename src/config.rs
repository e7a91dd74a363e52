//! Configuration management for inflight.
//!
//! Settings come from `inflight.toml`. The first file found wins: the
//! `--config` flag (or `INFLIGHT_CONFIG`), then
//! `<config_dir>/inflight/inflight.toml`. Without one the defaults apply.

use inflight_html::{CustomAttributeRule, RuleSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{InflightError, Result};

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "inflight.toml";

/// Configuration for inflight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging settings
    pub log: LogConfig,

    /// Custom attribute rules, tried in file order
    #[serde(rename = "url_valued_attribute")]
    pub rules: RuleSet,
}

/// The `[log]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, preferring `explicit` over the user config file.
    ///
    /// An explicit path must exist. The user config file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match user_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads and parses one configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| InflightError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| InflightError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rules that can never produce a match.
    pub fn unmatchable_rules(&self) -> impl Iterator<Item = &CustomAttributeRule> {
        self.rules
            .iter()
            .filter(|rule| !rule.category.is_defined() || rule.element.is_empty())
    }

    /// Logs a warning for each rule in [`Config::unmatchable_rules`].
    pub fn warn_unmatchable_rules(&self) {
        for rule in self.unmatchable_rules() {
            tracing::warn!(
                element = %rule.element,
                attribute = %rule.attribute,
                category = %rule.category,
                "custom attribute rule can never match"
            );
        }
    }
}

/// `<config_dir>/inflight/inflight.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inflight").join(CONFIG_FILE))
}

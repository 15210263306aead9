//! Configuration file parsing for .yarn-audit.toml

use crate::record::AuditAdvisory;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`YarnAuditConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = ".yarn-audit.toml";

/// Main configuration structure for .yarn-audit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YarnAuditConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Severity threshold for non-zero exit code
    #[serde(default = "default_fail_on")]
    pub fail_on: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Advisory ids to suppress (matched against the advisory and its resolution)
    #[serde(default)]
    pub advisories: Vec<u64>,

    /// Module names to suppress
    #[serde(default)]
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "json", "terminal" or "sarif"
    #[serde(default = "default_format")]
    pub format: String,

    /// Pretty-print JSON and SARIF output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_fail_on() -> String {
    "never".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fail_on: default_fail_on(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: true,
        }
    }
}

impl IgnoreConfig {
    /// Whether an advisory is suppressed by id or module name
    pub fn is_ignored(&self, advisory: &AuditAdvisory) -> bool {
        self.advisories.contains(&advisory.advisory.id)
            || self.advisories.contains(&advisory.resolution.id)
            || self
                .modules
                .iter()
                .any(|m| *m == advisory.advisory.module_name)
    }
}

impl YarnAuditConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: YarnAuditConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .yarn-audit.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

//! CLI configuration file (YAML).
//!
//! ```yaml
//! log:
//!   level: info
//!   json: false
//!   components:
//!     subjectkit-registry: debug
//! default_partial: true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use subjectkit_observability::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub log: LogConfig,
    /// Treat every `build` as `--partial`
    #[serde(default = "default_partial")]
    pub default_partial: bool,
}

fn default_partial() -> bool {
    false
}

impl CliConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("invalid config YAML")
    }

    /// Load `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in '{}'", path.display()))
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_flags(&mut self, verbose: bool, log_level: Option<&str>, json_logs: bool) {
        if verbose {
            self.log.level = "debug".into();
        }
        if let Some(level) = log_level {
            self.log.level = level.to_string();
        }
        if json_logs {
            self.log.json = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = CliConfig::from_yaml("{}").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log.level, "warn");
        assert!(!config.default_partial);
    }

    #[test]
    fn reads_nested_log_section() {
        let config = CliConfig::from_yaml(
            "log:\n  level: info\n  components:\n    subjectkit-registry: debug\ndefault_partial: true\n",
        )
        .unwrap();
        assert_eq!(config.log.directives(), "info,subjectkit_registry=debug");
        assert!(config.default_partial);
    }

    #[test]
    fn flags_override_file() {
        let mut config = CliConfig::default();
        config.apply_flags(true, None, false);
        assert_eq!(config.log.level, "debug");
        config.apply_flags(true, Some("trace"), true);
        assert_eq!(config.log.level, "trace");
        assert!(config.log.json);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/subjectkit.yaml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }
}

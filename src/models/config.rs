use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::temperature::{DEFAULT_ANALOGOUS_COUNT, DEFAULT_ANALOGOUS_DIVISIONS};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "CHROMATEMP_CONFIG";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Analogous color defaults
    #[serde(default)]
    pub analogous: AnalogousConfig,

    /// Output format when `--json` is not given
    #[serde(default)]
    pub output: OutputFormat,
}

/// Defaults for the `analogous` command and the report
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalogousConfig {
    /// Number of colors, input included
    #[serde(default = "default_count")]
    pub count: usize,

    /// Number of sections the color wheel is divided into
    #[serde(default = "default_divisions")]
    pub divisions: usize,
}

fn default_count() -> usize {
    DEFAULT_ANALOGOUS_COUNT
}

fn default_divisions() -> usize {
    DEFAULT_ANALOGOUS_DIVISIONS
}

impl Default for AnalogousConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            divisions: default_divisions(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Parse and validate YAML. Blank input yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from `path`, else from the file named by
    /// `CHROMATEMP_CONFIG`, else use defaults.
    ///
    /// A file that cannot be read or parsed is logged and replaced by the
    /// defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(value) => PathBuf::from(value),
                None => {
                    tracing::debug!("No config file given, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    count = config.analogous.count,
                    divisions = config.analogous.divisions,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.analogous.count == 0 {
            return Err(ConfigError::Invalid(
                "analogous.count must be at least 1".to_string(),
            ));
        }
        if self.analogous.divisions == 0 {
            return Err(ConfigError::Invalid(
                "analogous.divisions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

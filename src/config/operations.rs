//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_OFFSET_MINUTES;
use crate::error::{HostlockError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Duration, FixedOffset};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "HOSTLOCK_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HostlockError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HostlockError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path wins, then the `HOSTLOCK_CONFIG` environment variable.
    /// With neither, built-in defaults are used.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match Self::config_path(explicit) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// The config file that [`Config::resolve`] would read, if any.
    pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                HostlockError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            HostlockError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_duration_minutes` must be positive
    /// - `max_duration_minutes`, when set, must be positive and not below the default
    /// - `resource_pattern` must be a valid regex
    /// - `time_format` must be a valid strftime format
    /// - `display_utc_offset_minutes` must be less than a day in magnitude
    pub fn validate(&self) -> Result<()> {
        if self.default_duration_minutes == 0 {
            return Err(HostlockError::ConfigError(
                "default_duration_minutes must be greater than 0".to_string(),
            ));
        }

        if let Some(max) = self.max_duration_minutes {
            if max == 0 {
                return Err(HostlockError::ConfigError(
                    "max_duration_minutes must be greater than 0".to_string(),
                ));
            }
            if max < self.default_duration_minutes {
                return Err(HostlockError::ConfigError(format!(
                    "max_duration_minutes ({}) is below default_duration_minutes ({})",
                    max, self.default_duration_minutes
                )));
            }
        }

        self.resource_regex()?;

        if self.time_format.is_empty()
            || StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error))
        {
            return Err(HostlockError::ConfigError(format!(
                "time_format '{}' is not a valid strftime format",
                self.time_format
            )));
        }

        if let Some(offset) = self.display_utc_offset_minutes
            && offset.abs() >= MAX_OFFSET_MINUTES
        {
            return Err(HostlockError::ConfigError(format!(
                "display_utc_offset_minutes ({}) must be within +/-{}",
                offset,
                MAX_OFFSET_MINUTES - 1
            )));
        }

        Ok(())
    }

    /// Compile `resource_pattern`.
    pub fn resource_regex(&self) -> Result<Regex> {
        Regex::new(&self.resource_pattern).map_err(|e| {
            HostlockError::ConfigError(format!(
                "resource_pattern '{}' is not a valid regex: {}",
                self.resource_pattern, e
            ))
        })
    }

    /// Lock duration used when a command names none.
    pub fn default_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.default_duration_minutes))
    }

    /// Fixed display offset, or `None` for local time.
    pub fn display_offset(&self) -> Option<FixedOffset> {
        self.display_utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
    }
}

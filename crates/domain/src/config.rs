//! Application configuration loaded from TOML with CLI overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub state_path: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter: trace, debug, info, warn or error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StateConfig {
    /// Path of the JSON snapshot holding zones and record sets.
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        StateConfig {
            path: "zone53.json".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub state: StateConfig,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zone53.toml in current directory
    /// 3. /etc/zone53/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("zone53.toml").exists() {
            Self::from_file("zone53.toml")?
        } else if std::path::Path::new("/etc/zone53/config.toml").exists() {
            Self::from_file("/etc/zone53/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(state) = overrides.state_path {
            self.state.path = state;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.state.path, "zone53.json");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "debug"
            verbosity = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = Config::default();
        config.apply_cli_overrides(CliOverrides {
            state_path: Some("/tmp/zones.json".to_string()),
            log_level: Some("trace".to_string()),
        });
        assert_eq!(config.state.path, "/tmp/zones.json");
        assert_eq!(config.logging.level, "trace");
    }
}

//! User configuration loaded from TOML.
//!
//! Looked up at `$XDG_CONFIG_HOME/zcalc/config.toml` unless a path is given
//! on the command line. A missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::DEFAULT_SEPARATOR;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// What the Backspace key does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackspaceBehavior {
    /// Remove the last digit, like the DEL button.
    #[default]
    Delete,
    /// Reset the whole calculator, like the AC button.
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default)]
    pub backspace: BackspaceBehavior,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_separator")]
    pub thousands_separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: default_separator(),
        }
    }
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A file that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.keys.backspace, BackspaceBehavior::Delete);
        assert_eq!(config.display.thousands_separator, ',');
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[keys]
backspace = "clear"

[display]
thousands_separator = " "

[log]
level = "debug"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.keys.backspace, BackspaceBehavior::Clear);
        assert_eq!(config.display.thousands_separator, ' ');
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[keys]\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[keys]\nbackspace = \"explode\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keys]\nbackspace = \"clear\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.keys.backspace, BackspaceBehavior::Clear);
    }
}

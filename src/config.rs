//! Runtime settings for the demos: validation thresholds and logging.
//!
//! Every section and field has a default, so a partial file (or no file at
//! all) still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "PATTERNS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "patterns.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_name_length: usize,
    pub min_password_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            min_password_length: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()
    }

    /// Picks the format from the extension, falling back to sniffing for a
    /// leading `{`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Like [`AppConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Loads from `$PATTERNS_CONFIG`, or `patterns.toml` in the working
    /// directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_or_default(Path::new(&path))
    }

    /// Checks every setting and reports all problems together.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();

        if self.validation.min_name_length == 0 {
            problems.push("validation.min_name_length must be at least 1".to_string());
        }
        if self.validation.min_password_length == 0 {
            problems.push("validation.min_password_length must be at least 1".to_string());
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            problems.push(format!(
                "logging.level '{}' must be one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }

        if problems.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.validation.min_name_length, 3);
        assert_eq!(config.validation.min_password_length, 8);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str("[validation]\nmin_password_length = 12\n").unwrap();
        assert_eq!(config.validation.min_password_length, 12);
        assert_eq!(config.validation.min_name_length, 3);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = AppConfig::from_json_str(r#"{"logging": {"level": "debug", "ansi": false}}"#)
            .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.ansi);
    }

    #[test]
    fn test_invalid_values_are_all_reported() {
        let err = AppConfig::from_toml_str(
            "[validation]\nmin_name_length = 0\nmin_password_length = 0\n[logging]\nlevel = \"loud\"\n",
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(problems) => assert_eq!(problems.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_reports_position() {
        let err = AppConfig::from_json_str("{\n  \"logging\": }").unwrap_err();
        assert!(matches!(err, ConfigError::Json { line: 2, .. }));
    }

    #[test]
    fn test_load_by_extension_and_sniffing() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("patterns.toml");
        fs::write(&toml_path, "[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(AppConfig::load(&toml_path).unwrap().logging.level, "warn");

        let mut sniffed = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
        write!(sniffed, r#"{{"validation": {{"min_name_length": 5}}}}"#).unwrap();
        assert_eq!(
            AppConfig::load(sniffed.path()).unwrap().validation.min_name_length,
            5
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(matches!(AppConfig::load(&missing), Err(ConfigError::Io { .. })));
        assert_eq!(AppConfig::load_or_default(&missing).unwrap(), AppConfig::default());
    }
}

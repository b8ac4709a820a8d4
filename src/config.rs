//! Tool configuration.
//!
//! A [`ThumbsConfig`] names the external binary and the default time budget
//! for every invocation. It is a plain value: build one at startup (from
//! defaults or a TOML file) and hand it to [`Thumbs::new`](crate::Thumbs::new).
//! Changing configuration means building a new `Thumbs`; nothing is global.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! convert_command = "convert"  # Binary to run (e.g. "magick" for ImageMagick 7)
//! timeout_secs = 20            # Wall-clock budget per invocation
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings shared by every operation of a [`Thumbs`](crate::Thumbs) service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbsConfig {
    /// Name or path of the ImageMagick `convert`-compatible binary.
    ///
    /// Not validated: a wrong value surfaces as a spawn failure on first use.
    pub convert_command: String,
    /// Default wall-clock budget per invocation, in seconds.
    pub timeout_secs: u64,
}

impl Default for ThumbsConfig {
    fn default() -> Self {
        Self {
            convert_command: "convert".to_string(),
            timeout_secs: 20,
        }
    }
}

impl ThumbsConfig {
    /// Defaults with a different tool binary.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            convert_command: command.into(),
            ..Self::default()
        }
    }

    /// Parse a sparse TOML document; missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ThumbsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error and yields [`ThumbsConfig::default`].
pub fn load_config(path: &Path) -> Result<ThumbsConfig, ConfigError> {
    if !path.exists() {
        return Ok(ThumbsConfig::default());
    }
    let content = fs::read_to_string(path)?;
    ThumbsConfig::from_toml(&content)
}

/// A documented config file with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# Binary to run. Use "magick" for ImageMagick 7 installs without `convert`.
convert_command = "convert"

# Wall-clock budget per invocation, in seconds. The tool is killed when it
# runs longer and the call fails with a timeout error.
timeout_secs = 20
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = ThumbsConfig::default();
        assert_eq!(config.convert_command, "convert");
        assert_eq!(config.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn with_command_keeps_default_timeout() {
        let config = ThumbsConfig::with_command("/opt/im/bin/magick");
        assert_eq!(config.convert_command, "/opt/im/bin/magick");
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn parse_partial_config() {
        let config = ThumbsConfig::from_toml(r#"convert_command = "magick""#).unwrap();
        assert_eq!(config.convert_command, "magick");
        // Unspecified defaults preserved
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn parse_empty_config_is_default() {
        assert_eq!(ThumbsConfig::from_toml("").unwrap(), ThumbsConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = ThumbsConfig::from_toml("convert = \"gm\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ThumbsConfig::from_toml("timeout_secs = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config = ThumbsConfig::from_toml(stock_config_toml()).unwrap();
        assert_eq!(config, ThumbsConfig::default());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("thumbs.toml")).unwrap();
        assert_eq!(config, ThumbsConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("thumbs.toml");
        fs::write(&path, "convert_command = \"gm-convert\"\ntimeout_secs = 5\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.convert_command, "gm-convert");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("thumbs.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}

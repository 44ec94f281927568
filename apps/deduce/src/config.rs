//! # Configuration
//!
//! Optional `deduce.toml` in the working directory (or `--config <path>`):
//!
//! ```toml
//! theorems = "theorems.json"
//!
//! [logging]
//! format = "text"        # or "json"
//! filter = "deduce=info"
//!
//! [output]
//! json = false
//! ```
//!
//! Every key is optional. Command-line flags and the `RUST_LOG` /
//! `DEDUCE_LOG_FORMAT` environment variables take precedence over the file.

use crate::error::CliError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "deduce.toml";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "deduce=info";

/// Environment variable selecting the log format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "DEDUCE_LOG_FORMAT";

// =============================================================================
// CONFIG SECTIONS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theorem file. Relative paths are resolved against the config file's directory.
    pub theorems: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print results as JSON, as if `--json-mode` were passed.
    pub json: bool,
}

/// Output format of the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse `text` or `json`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// The format requested through `DEDUCE_LOG_FORMAT`, if any.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|name| Self::from_name(&name))
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Load the config file at `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let mut config = Self::from_toml(&text)?;

        if let (Some(theorems), Some(dir)) = (&config.theorems, path.parent())
            && theorems.is_relative()
        {
            config.theorems = Some(dir.join(theorems));
        }

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `explicit` if given, else `deduce.toml` if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The log filter from the file, or the default.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.logging.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = Config::from_toml("").expect("parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn all_sections() {
        let config = Config::from_toml(
            r#"
            theorems = "kb/theorems.json"

            [logging]
            format = "json"
            filter = "deduce=trace"

            [output]
            json = true
            "#,
        )
        .expect("parse");

        assert_eq!(config.theorems, Some(PathBuf::from("kb/theorems.json")));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.log_filter(), "deduce=trace");
        assert!(config.output.json);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = Config::from_toml("theorem = \"typo.json\"");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn log_format_names() {
        assert_eq!(LogFormat::from_name("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name("text"), Some(LogFormat::Text));
        assert_eq!(LogFormat::from_name("yaml"), None);
    }
}

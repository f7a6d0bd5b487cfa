//! Subscriber configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Target prefix shared by every Bazaar crate.
pub const TARGET_PREFIX: &str = "bazaar";

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Unknown level or format name.
    #[error("Invalid logging setting: {0}")]
    InvalidSetting(String),

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ObservabilityError::InvalidSetting(format!("log level '{other}'"))),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// One JSON object per event, for log aggregation.
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(ObservabilityError::InvalidSetting(format!("log format '{other}'"))),
        }
    }
}

/// `[logging]` section of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LoggingConfig {
    /// Level actually used: `--verbose` lowers anything above debug to debug.
    pub fn effective_level(&self, verbose: bool) -> LogLevel {
        if verbose {
            self.level.min(LogLevel::Debug)
        } else {
            self.level
        }
    }

    /// Default directive when `RUST_LOG` is unset, e.g. `bazaar=info`.
    pub fn default_directive(&self, verbose: bool) -> String {
        format!("{TARGET_PREFIX}={}", self.effective_level(verbose))
    }

    /// Filter from `RUST_LOG`, falling back to [`LoggingConfig::default_directive`].
    pub fn env_filter(&self, verbose: bool) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive(verbose)))
    }
}

/// Install the global subscriber. Events go to stderr.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<(), ObservabilityError> {
    let json_layer = (config.format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (config.format == LogFormat::Human).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(verbose)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(config.env_filter(verbose))
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_verbose_lowers_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.default_directive(false), "bazaar=info");
        assert_eq!(config.default_directive(true), "bazaar=debug");

        let trace = LoggingConfig {
            level: LogLevel::Trace,
            ..LoggingConfig::default()
        };
        assert_eq!(trace.effective_level(true), LogLevel::Trace);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, LogLevel::Info);
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        let first = init(&config, false);
        let second = init(&config, false);
        assert!(first.is_ok());
        assert!(matches!(second, Err(ObservabilityError::AlreadyInitialized(_))));
    }
}

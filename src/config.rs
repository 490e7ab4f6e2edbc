//! Configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section is optional; an
//! empty file yields the defaults.
//!
//! ```toml
//! [logging]
//! level = "info"      # tracing EnvFilter directive, RUST_LOG overrides
//! format = "pretty"   # "pretty" or "json"
//!
//! [settlement]
//! workers = 4               # dedicated rayon threads, omit for the global pool
//! parallel_threshold = 64   # batches smaller than this settle sequentially
//! ```
//!
//! # Example
//!
//! ```no_run
//! use betsettle::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("betsettle.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Default number of bets at which batch settlement goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Batch settlement tuning.
    #[serde(default)]
    pub settlement: SettlementConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over `level`. Logs go to stderr so that
    /// command output on stdout stays machine-readable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Batch settlement configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettlementConfig {
    /// Size of a dedicated worker pool. `None` uses rayon's global pool.
    pub workers: Option<usize>,

    /// Batches with fewer bets than this settle on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            workers: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Check values serde cannot.
    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if self.settlement.workers == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settlement.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn parses_every_section() {
        let config = Config::parse_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [settlement]
            workers = 2
            parallel_threshold = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.settlement.workers, Some(2));
        assert_eq!(config.settlement.parallel_threshold, 8);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::parse_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "format", .. })
        ));
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Config::parse_toml("[settlement]\nworkers = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "workers", .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::parse_toml("[settlement]\nthreads = 4").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::load("/nonexistent/betsettle.toml").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }
}

//! Terminal front-end configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// List history newest first at startup.
    #[serde(default)]
    reversed: bool,

    /// Where tracing output is written.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_timeline_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            reversed: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(reversed = config.reversed, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration: file (if any), then CLI flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.reversed {
            self.reversed = true;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_file_values() {
        let file = write_config(
            "reversed = true\nlog_file = \"game.log\"\nlog_filter = \"strictly_timeline=debug\"\n",
        );
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert!(*config.reversed());
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
        assert_eq!(config.log_filter(), "strictly_timeline=debug");
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("log_file = \"game.log\"\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            reversed: true,
            log_file: Some(PathBuf::from("cli.log")),
        };
        let config = TuiConfig::resolve(&cli).unwrap();
        assert!(*config.reversed());
        assert_eq!(config.log_file(), &PathBuf::from("cli.log"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = TuiConfig::from_file("/nonexistent/strictly_timeline.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("reversed = \"sometimes\"\n");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}

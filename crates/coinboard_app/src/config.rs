//! Application configuration: RON file merged with command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context};
use coinboard_engine::{FetchSettings, DEFAULT_ENDPOINT};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::platform::logging::LogDestination;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub storage_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub log_file: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_dir: PathBuf::from(".coinboard"),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
            log_file: PathBuf::from("coinboard.log"),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
        }
    }
}

impl AppConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {}", path.display()));
            }
        };
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(dir) = &cli.storage_dir {
            self.storage_dir = dir.clone();
        }
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        self
    }

    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        coinboard_logging::parse_level(&self.log_level)
            .ok_or_else(|| anyhow!("unknown log level {:?}", self.log_level))
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint, "https://api.coincap.io/v2/assets");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::parse(
            r#"(
                endpoint: "http://127.0.0.1:8080/v2/assets",
                log_destination: Terminal,
                request_timeout_secs: 5,
            )"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:8080/v2/assets");
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.storage_dir, PathBuf::from(".coinboard"));
        assert_eq!(
            config.fetch_settings().request_timeout,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("coinboard.ron");
        fs::write(&path, "(endpoint: 42").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "coinboard",
            "--endpoint",
            "http://localhost/assets",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let config = AppConfig::default().with_overrides(&cli);

        assert_eq!(config.endpoint, "http://localhost/assets");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
        assert_eq!(config.fetch_settings().endpoint, "http://localhost/assets");
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert!(config.level_filter().is_err());
    }
}

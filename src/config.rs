//! Run settings: CLI flags layered over an optional YAML file.
//!
//! ```yaml
//! # recent.yaml
//! urls:
//!   - https://example.com/json/feed
//! days: 2
//! limit: 20
//! output: csv
//! user_agent: "recent_json/0.1"
//! ```
//!
//! A flag given on the command line wins over the file, and the file wins
//! over the defaults. URLs from the file are read after those on the
//! command line.

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::outputs::OutputFormat;
use serde::Deserialize;
use std::fs;
use tracing::{debug, info, instrument};

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub urls: Vec<String>,
    pub days: Option<i64>,
    pub limit: Option<i64>,
    pub output: Option<OutputFormat>,
    pub user_agent: Option<String>,
}

impl FileSettings {
    #[instrument(level = "info")]
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let settings = Self::from_yaml(&raw).map_err(|source| ConfigError::Yaml {
            path: path.to_string(),
            source,
        })?;
        info!(urls = settings.urls.len(), "Loaded config file");
        Ok(settings)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub urls: Vec<String>,
    pub days: i64,
    pub limit: i64,
    pub output: OutputFormat,
    pub user_agent: Option<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileSettings) -> Result<Self, ConfigError> {
        for url in &file.urls {
            url::Url::parse(url).map_err(|source| ConfigError::BadUrl {
                url: url.clone(),
                source,
            })?;
        }

        let urls: Vec<String> = cli.urls.iter().cloned().chain(file.urls).collect();
        if urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }

        let settings = Self {
            urls,
            days: cli.days.or(file.days).unwrap_or(0),
            limit: cli.limit.or(file.limit).unwrap_or(0),
            output: cli.output.or(file.output).unwrap_or_default(),
            user_agent: file.user_agent,
        };
        debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}

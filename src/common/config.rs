//! Configuration file handling

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::Path;

use super::paths::config_path;
use super::Result;
use crate::sequence::DEFAULT_COUNT;

/// Configuration for the `count` subcommand
///
/// Only `count` reads this file; the interactive run never does.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Counting loop settings
    #[serde(default)]
    pub count: CountConfig,
}

/// Inclusive bounds of the counting loop
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CountConfig {
    #[serde(default = "default_count_start")]
    pub start: i64,

    #[serde(default = "default_count_end")]
    pub end: i64,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            start: default_count_start(),
            end: default_count_end(),
        }
    }
}

fn default_count_start() -> i64 {
    *DEFAULT_COUNT.start()
}
fn default_count_end() -> i64 {
    *DEFAULT_COUNT.end()
}

impl CountConfig {
    /// The configured range as an inclusive range
    pub fn range(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loading config file");
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}

// Copyright 2026 Oxide Computer Company

//! History view configuration.

use crate::ConfigError;
use camino::Utf8Path;
use commit_graph::{DEFAULT_COLORS, Palette};
use fs_err as fs;
use serde::Deserialize;

/// The number of commits fetched per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Settings for a paged history view.
///
/// Loaded from TOML; every key is optional:
///
/// ```toml
/// page_size = 100
/// palette = ["#e06c75", "#61afef", "#98c379"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// How many commits to request per page.
    pub page_size: usize,
    /// Lane colors, in the order they are handed out.
    pub palette: Vec<String>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            page_size: DEFAULT_PAGE_SIZE,
            palette: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl HistoryConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: HistoryConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: HistoryConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigError::ParseFile { path: path.to_owned(), source }
            })?;
        config.validate()?;
        tracing::debug!(
            %path,
            page_size = config.page_size,
            colors = config.palette.len(),
            "loaded history config"
        );
        Ok(config)
    }

    /// Builds the configured palette.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::new(&self.palette)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.palette()?;
        Ok(())
    }
}

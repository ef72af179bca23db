//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::DEFAULT_EXTENSION;
use crate::infra::{DEFAULT_NOTES_DIR, StoreConfig};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes directory
    pub dir: Option<PathBuf>,

    /// Suffix identifying note files
    pub extension: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).with_context(|| {
            format!(
                "falha ao ler o arquivo de configuração: {}",
                config_path.display()
            )
        })?;

        Self::parse(&contents).with_context(|| {
            format!(
                "falha ao interpretar o arquivo de configuração: {}",
                config_path.display()
            )
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/novanotes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("novanotes")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `notes` under the current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR))
    }

    /// Resolve the note file suffix.
    pub fn extension(&self) -> String {
        self.extension
            .clone()
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }

    /// Builds the store configuration for this run.
    pub fn store_config(&self, cli_dir: Option<&PathBuf>) -> StoreConfig {
        StoreConfig::new(self.notes_dir(cli_dir), self.extension())
    }
}

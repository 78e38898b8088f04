use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Name of the heats sheet in the output workbook
    #[serde(default = "default_heats_sheet_name")]
    pub heats_sheet_name: String,

    /// Name of the alternates sheet in the output workbook
    #[serde(default = "default_alternates_sheet_name")]
    pub alternates_sheet_name: String,

    /// Optional cap on heats kept per event, None for unlimited
    #[serde(default)]
    pub max_heats_per_event: Option<u32>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_heats_sheet_name() -> String {
    "Heats".to_string()
}

fn default_alternates_sheet_name() -> String {
    "Alternates".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.heats_sheet_name.trim().is_empty() {
            return Err(anyhow!("Heats sheet name must not be empty"));
        }
        if self.alternates_sheet_name.trim().is_empty() {
            return Err(anyhow!("Alternates sheet name must not be empty"));
        }
        if self.heats_sheet_name == self.alternates_sheet_name {
            return Err(anyhow!("Sheet names must differ"));
        }
        // Worksheet names longer than 31 characters are rejected by the
        // spreadsheet container format.
        if self.heats_sheet_name.chars().count() > 31
            || self.alternates_sheet_name.chars().count() > 31
        {
            return Err(anyhow!("Sheet names must be at most 31 characters"));
        }
        if let Some(0) = self.max_heats_per_event {
            return Err(anyhow!("max_heats_per_event must be at least 1 when set"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            heats_sheet_name: default_heats_sheet_name(),
            alternates_sheet_name: default_alternates_sheet_name(),
            max_heats_per_event: None,
            log_level: LogLevel::default(),
        }
    }
}

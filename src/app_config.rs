use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Export defaults
    #[serde(default)]
    pub export: ExportSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Default limits applied to report exports
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportSettings {
    // @field: Total cap on exported entries
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    // @field: Keep-every-Nth sampling interval
    #[serde(default = "default_interval")]
    pub interval: usize,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_results() -> usize {
    100
}

fn default_interval() -> usize {
    1
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            max_results: default_max_results(),
            interval: default_interval(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export: ExportSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| anyhow!("Failed to open config file {:?}: {}", path.as_ref(), e))?;
        let reader = std::io::BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path.as_ref(), e))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.export.max_results == 0 {
            return Err(anyhow!("export.max_results must be at least 1"));
        }
        if self.export.interval == 0 {
            return Err(anyhow!("export.interval must be at least 1"));
        }
        Ok(())
    }
}

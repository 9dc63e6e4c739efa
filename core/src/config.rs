//! Configuration management for port selection and enumeration.
//!
//! Stores configuration in JSON format at `~/.port-randomizer/config.json`.
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::{DYNAMIC_PORT_MAX, DYNAMIC_PORT_MIN};
use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Random port selection settings.
    #[serde(default)]
    pub selection: SelectionPolicy,

    /// Socket enumeration command.
    #[serde(default)]
    pub enumerator: EnumeratorConfig,

    /// Gamified output of the `randomize` command.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Check every section for values the services cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.selection.validate()
    }
}

/// Range and retry cap for random port selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPolicy {
    /// Lowest candidate port (inclusive).
    #[serde(default = "default_min_port")]
    pub min_port: u16,

    /// Highest candidate port (inclusive).
    #[serde(default = "default_max_port")]
    pub max_port: u16,

    /// Number of draws before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_min_port() -> u16 {
    DYNAMIC_PORT_MIN
}

fn default_max_port() -> u16 {
    DYNAMIC_PORT_MAX
}

fn default_max_attempts() -> u32 {
    10_000
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            min_port: default_min_port(),
            max_port: default_max_port(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl SelectionPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.min_port > self.max_port {
            return Err(Error::Config(format!(
                "selection.minPort ({}) is greater than selection.maxPort ({})",
                self.min_port, self.max_port
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::Config(
                "selection.maxAttempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command used to enumerate bound sockets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorConfig {
    /// Program to run. `None` selects the platform default (`ss` on Linux).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments passed to `program`.
    #[serde(default = "default_enumerator_args")]
    pub args: Vec<String>,
}

fn default_enumerator_args() -> Vec<String> {
    vec!["-tuln".to_string()]
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: default_enumerator_args(),
        }
    }
}

/// Decoy animation shown before the selected port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Number of decoy ports to cycle through.
    #[serde(default = "default_cycles")]
    pub cycles: u32,

    /// Delay between decoys in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_cycles() -> u32 {
    10
}

fn default_delay_ms() -> u64 {
    100
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Configuration store for reading and writing the config file.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.port-randomizer/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".port-randomizer").join("config.json");
        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> PathBuf {
        self.config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;

        let config_dir = self.config_dir();
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .await
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        // Write atomically by writing to temp file then renaming
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }
}

//! Configuration management

use crate::error::{MemorizeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_database() -> String {
    "database.json".to_string()
}

fn default_tags() -> String {
    "word".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,

    /// Database snapshot file name inside the .memorize directory
    #[serde(default = "default_database")]
    pub database: String,

    /// Whitespace-separated tags applied to every new word
    #[serde(default = "default_tags")]
    pub default_tags: String,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            database: default_database(),
            default_tags: default_tags(),
        }
    }

    /// Load config from .memorize/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".memorize").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MemorizeError::NotMemorizeDirectory(path.to_path_buf())
            } else {
                MemorizeError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MemorizeError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .memorize/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let memorize_dir = path.join(".memorize");
        let config_path = memorize_dir.join("config.toml");

        if !memorize_dir.exists() {
            fs::create_dir(&memorize_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MemorizeError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

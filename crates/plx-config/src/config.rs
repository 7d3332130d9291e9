use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "PLX_CONFIG";

/// Keys accepted by `get`/`set`
pub const KEYS: &[&str] = &["index-path", "receipts-path"];

/// User settings stored in `plx.toml`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipts_path: Option<String>,
}

impl Config {
    /// Config file location: `$PLX_CONFIG` if set, otherwise `<root>/plx.toml`
    pub fn path(root: &Path) -> PathBuf {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }
        root.join("plx.toml")
    }

    /// Load from `path`, returning defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "index-path" => Ok(self.index_path.clone()),
            "receipts-path" => Ok(self.receipts_path.clone()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "index-path" => self.index_path = Some(value),
            "receipts-path" => self.receipts_path = Some(value),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.index_path.is_none() && self.receipts_path.is_none()
    }

    pub fn values_iter(&self) -> Vec<(&str, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.index_path {
            values.push(("index-path", val.clone()));
        }
        if let Some(ref val) = self.receipts_path {
            values.push(("receipts-path", val.clone()));
        }
        values
    }
}

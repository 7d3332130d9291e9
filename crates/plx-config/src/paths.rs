//! Directory layout under the plx root
//!
//! ```text
//! <root>/
//!   plx.toml        optional config file
//!   plx.log         log of the last run
//!   index/plugins/  one manifest per plugin
//!   receipts/       one receipt per installed plugin
//!   store/<name>/   installed plugin files
//!   bin/            entry point links
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::errors::ConfigError;

/// Environment variable overriding the plx root directory
pub const ROOT_ENV: &str = "PLX_ROOT";

fn default_root() -> Option<PathBuf> {
    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir().map(|h| h.join(".plx"))
    }

    #[cfg(target_os = "windows")]
    {
        dirs::data_local_dir().map(|d| d.join("plx"))
    }
}

/// Pick the root from an explicit override, falling back to the platform default
pub fn resolve_root(override_value: Option<&str>) -> Result<PathBuf, ConfigError> {
    if let Some(value) = override_value.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    default_root().ok_or(ConfigError::NoHomeDir)
}

/// The plx root directory, honoring `PLX_ROOT`
pub fn root_dir() -> Result<PathBuf, ConfigError> {
    let env_value = std::env::var(ROOT_ENV).ok();
    let root = resolve_root(env_value.as_deref())?;
    debug!("Using plx root: {:?}", root);
    Ok(root)
}

/// Concrete directories used by plx
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root: PathBuf,
    pub index: PathBuf,
    pub receipts: PathBuf,
    pub store: PathBuf,
    pub bin: PathBuf,
}

impl Paths {
    /// Default layout for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Paths {
            index: root.join("index").join("plugins"),
            receipts: root.join("receipts"),
            store: root.join("store"),
            bin: root.join("bin"),
            root,
        }
    }

    /// Default layout for `root` with overrides from `config` applied
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        let mut paths = Self::new(root);
        if let Some(ref index) = config.index_path {
            paths.index = PathBuf::from(index);
        }
        if let Some(ref receipts) = config.receipts_path {
            paths.receipts = PathBuf::from(receipts);
        }
        paths
    }

    /// Directory holding the installed files of `plugin`
    pub fn plugin_store_dir(&self, plugin: &str) -> PathBuf {
        self.store.join(plugin)
    }

    /// Log file for the current run
    pub fn log_file(&self) -> PathBuf {
        self.root.join("plx.log")
    }

    /// Create the receipts, store and bin directories if missing
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        for dir in [&self.receipts, &self.store, &self.bin] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_override() {
        let root = resolve_root(Some("  /opt/plx  "));
        assert!(root.is_ok_and(|p| p == PathBuf::from("/opt/plx")));
    }

    #[test]
    fn test_resolve_root_blank_override_uses_default() {
        let from_blank = resolve_root(Some("   "));
        let from_none = resolve_root(None);
        assert_eq!(from_blank.ok(), from_none.ok());
    }

    #[test]
    fn test_default_layout() {
        let paths = Paths::new("/plx");
        assert_eq!(paths.index, PathBuf::from("/plx/index/plugins"));
        assert_eq!(paths.receipts, PathBuf::from("/plx/receipts"));
        assert_eq!(paths.plugin_store_dir("foo"), PathBuf::from("/plx/store/foo"));
        assert_eq!(paths.log_file(), PathBuf::from("/plx/plx.log"));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config {
            index_path: Some("/srv/index".to_string()),
            receipts_path: None,
        };
        let paths = Paths::from_config("/plx", &config);
        assert_eq!(paths.index, PathBuf::from("/srv/index"));
        assert_eq!(paths.receipts, PathBuf::from("/plx/receipts"));
    }

    #[test]
    fn test_ensure_dirs() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let paths = Paths::new(temp_dir.path().join("root"));
        assert!(paths.ensure_dirs().is_ok());
        assert!(paths.receipts.is_dir());
        assert!(paths.store.is_dir());
        assert!(paths.bin.is_dir());
    }
}

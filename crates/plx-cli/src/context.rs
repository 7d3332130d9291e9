use plx_config::{root_dir, Config, Paths};
use std::path::{Path, PathBuf};

use crate::errors::CommandError;

/// Resolved configuration and directory layout for a command run
#[derive(Debug, Clone)]
pub struct PlxContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub paths: Paths,
}

impl PlxContext {
    /// Resolve the root from `PLX_ROOT` or the platform default
    pub fn load() -> Result<Self, CommandError> {
        let root = root_dir()?;
        Self::for_root(&root)
    }

    pub fn for_root(root: &Path) -> Result<Self, CommandError> {
        let config_path = Config::path(root);
        let config = Config::load(&config_path)?;
        let paths = Paths::from_config(root, &config);

        Ok(PlxContext {
            config,
            config_path,
            paths,
        })
    }
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving configuration or paths
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory; set PLX_ROOT")]
    NoHomeDir,

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown config key: {0}. Supported keys: index-path, receipts-path")]
    UnknownKey(String),
}

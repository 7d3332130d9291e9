use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or validating plugin manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("plugin manifest not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid plugin name '{0}'")]
    InvalidName(String),

    #[error("Plugin '{name}' has invalid manifest: {reason}")]
    Invalid { name: String, reason: String },
}

impl ManifestError {
    /// Classify an IO failure on `path`, keeping "not found" separate
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::NotFound { path, source }
        } else {
            ManifestError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ManifestError::NotFound { .. })
    }
}

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned by the receipt store
///
/// `NotFound` is kept apart from every other IO failure so that callers can
/// treat a missing receipt as "not installed".
#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("receipt not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error on receipt {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse receipt {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize receipt for plugin '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ReceiptError {
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            ReceiptError::NotFound { path, source }
        } else {
            ReceiptError::Io { path, source }
        }
    }

    /// True when the receipt file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReceiptError::NotFound { .. })
    }

    /// Kind of the underlying IO error, if this error came from the file system
    pub fn io_error_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ReceiptError::NotFound { source, .. } | ReceiptError::Io { source, .. } => {
                Some(source.kind())
            }
            ReceiptError::Parse { .. } | ReceiptError::Serialize { .. } => None,
        }
    }

    /// Path the failing operation was acting on
    pub fn path(&self) -> Option<&Path> {
        match self {
            ReceiptError::NotFound { path, .. }
            | ReceiptError::Io { path, .. }
            | ReceiptError::Parse { path, .. } => Some(path),
            ReceiptError::Serialize { .. } => None,
        }
    }
}

impl From<ReceiptError> for io::Error {
    fn from(err: ReceiptError) -> Self {
        let kind = err.io_error_kind().unwrap_or(io::ErrorKind::InvalidData);
        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ReceiptError {
        ReceiptError::from_io(
            Path::new("foo.yaml"),
            io::Error::from(io::ErrorKind::NotFound),
        )
    }

    #[test]
    fn test_not_found_classification() {
        let err = not_found();
        assert!(err.is_not_found());
        assert_eq!(err.io_error_kind(), Some(io::ErrorKind::NotFound));
        assert_eq!(err.path(), Some(Path::new("foo.yaml")));
    }

    #[test]
    fn test_other_io_is_not_not_found() {
        let err = ReceiptError::from_io(
            Path::new("foo.yaml"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_not_found());
        assert_eq!(err.io_error_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_conversion_to_io_error_keeps_kind() {
        let io_err: io::Error = not_found().into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert!(io_err.to_string().contains("foo.yaml"));
    }

    #[test]
    fn test_parse_error_converts_to_invalid_data() {
        let source = match serde_yaml::from_str::<u32>("not a number") {
            Ok(_) => return,
            Err(e) => e,
        };
        let err = ReceiptError::Parse {
            path: PathBuf::from("foo.yaml"),
            source,
        };
        assert!(!err.is_not_found());
        assert_eq!(err.io_error_kind(), None);

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}

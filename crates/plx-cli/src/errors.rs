use plx_config::ConfigError;
use plx_manifest::ManifestError;
use plx_receipt::ReceiptError;
use std::io;
use thiserror::Error;

/// Errors surfaced by plx commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Index error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Plugin '{0}' is not installed")]
    NotInstalled(String),

    #[error("Plugin '{name}' has no platform matching os={os}, arch={arch}")]
    NoMatchingPlatform {
        name: String,
        os: String,
        arch: String,
    },

    #[error("Failed to render output: {0}")]
    Output(String),
}

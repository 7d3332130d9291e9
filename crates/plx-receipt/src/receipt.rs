//! Receipt writer and reader
//!
//! `store` serializes a manifest to YAML and atomically replaces the
//! destination file; `load` reads it back. Neither function creates
//! directories, retries or logs: every failure goes straight to the caller.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use plx_manifest::PluginManifest;

use crate::errors::ReceiptError;

/// Sibling path used while a receipt is being written
fn temp_path_for(dest: &Path) -> io::Result<PathBuf> {
    let file_name = dest.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "receipt destination has no file name",
        )
    })?;
    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(dest.with_file_name(temp_name))
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Write `manifest` as a receipt at `dest`, replacing any existing file
///
/// The bytes go to a temporary sibling first and are renamed into place, so
/// `dest` is either the complete new receipt or whatever was there before.
pub fn store(manifest: &PluginManifest, dest: &Path) -> Result<(), ReceiptError> {
    let yaml = serde_yaml::to_string(manifest).map_err(|source| ReceiptError::Serialize {
        name: manifest.name().to_string(),
        source,
    })?;

    let temp_path = temp_path_for(dest).map_err(|e| ReceiptError::from_io(dest, e))?;
    let written = write_synced(&temp_path, yaml.as_bytes())
        .and_then(|()| fs::rename(&temp_path, dest));

    if let Err(e) = written {
        // Best effort: the temp file may not exist if creation itself failed.
        let _ = fs::remove_file(&temp_path);
        return Err(ReceiptError::from_io(dest, e));
    }

    Ok(())
}

/// Read the receipt at `src`
///
/// A missing file yields [`ReceiptError::NotFound`]; any other read failure is
/// [`ReceiptError::Io`] and content that is not a manifest is
/// [`ReceiptError::Parse`].
pub fn load(src: &Path) -> Result<PluginManifest, ReceiptError> {
    let bytes = fs::read(src).map_err(|e| ReceiptError::from_io(src, e))?;
    serde_yaml::from_slice(&bytes).map_err(|source| ReceiptError::Parse {
        path: src.to_path_buf(),
        source,
    })
}

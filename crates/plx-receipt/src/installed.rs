//! Queries over a directory of receipts
//!
//! One receipt per installed plugin, named `<plugin>.yaml`. A plugin is
//! installed exactly when its receipt exists.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use plx_manifest::index::{manifest_path, MANIFEST_EXTENSION};
use plx_manifest::PluginManifest;

use crate::errors::ReceiptError;
use crate::receipt::load;

/// Receipt location for `name` inside `receipts_dir`
pub fn receipt_path(receipts_dir: &Path, name: &str) -> PathBuf {
    manifest_path(receipts_dir, name)
}

/// Load the receipt for `name`, mapping a missing receipt to `None`
pub fn load_installed(
    receipts_dir: &Path,
    name: &str,
) -> Result<Option<PluginManifest>, ReceiptError> {
    match load(&receipt_path(receipts_dir, name)) {
        Ok(manifest) => Ok(Some(manifest)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Whether a receipt for `name` exists and is readable
pub fn is_installed(receipts_dir: &Path, name: &str) -> Result<bool, ReceiptError> {
    load_installed(receipts_dir, name).map(|receipt| receipt.is_some())
}

/// All receipts in `receipts_dir`, sorted by plugin name
///
/// A receipts directory that does not exist yet means nothing is installed.
pub fn list_installed(receipts_dir: &Path) -> Result<Vec<PluginManifest>, ReceiptError> {
    match fs::metadata(receipts_dir) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ReceiptError::from_io(receipts_dir, e)),
    }

    let mut receipts = Vec::new();
    for entry in WalkDir::new(receipts_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(receipts_dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            ReceiptError::from_io(&path, source)
        })?;

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|s| s.to_str()) != Some(MANIFEST_EXTENSION)
        {
            continue;
        }
        receipts.push(load(path)?);
    }

    receipts.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(receipts)
}

use colored::Colorize;
use plx_config::Paths;
use plx_manifest::PluginManifest;
use plx_receipt::{load_installed, receipt_path};
use std::fs;
use std::io;
use tracing::debug;

use super::check_plugin_name;
use crate::context::PlxContext;
use crate::errors::CommandError;

fn remove_if_present(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Delete the installed files and the receipt of `name`
///
/// The receipt is removed last so that an interrupted removal still shows the
/// plugin as installed and can be retried.
pub fn remove(paths: &Paths, name: &str) -> Result<PluginManifest, CommandError> {
    check_plugin_name(name)?;

    let receipt = load_installed(&paths.receipts, name)?
        .ok_or_else(|| CommandError::NotInstalled(name.to_string()))?;

    let store_dir = paths.plugin_store_dir(name);
    debug!("Removing plugin files: {:?}", store_dir);
    remove_if_present(fs::remove_dir_all(&store_dir))?;

    let receipt_file = receipt_path(&paths.receipts, name);
    debug!("Removing receipt: {:?}", receipt_file);
    remove_if_present(fs::remove_file(&receipt_file))?;

    Ok(receipt)
}

pub fn remove_plugin(ctx: &PlxContext, name: &str) -> Result<(), CommandError> {
    let receipt = remove(&ctx.paths, name)?;

    plx_logger::info(&format!("Plugin '{}' removed", name));
    println!(
        " {} {} {}",
        "-".bold().red(),
        receipt.name().bold(),
        receipt.version().unwrap_or("unversioned").dimmed()
    );
    Ok(())
}

use colored::Colorize;
use plx_receipt::load_installed;

use super::check_plugin_name;
use crate::context::PlxContext;
use crate::errors::CommandError;

/// Print whether `name` is installed; a missing receipt is not an error
pub fn plugin_status(ctx: &PlxContext, name: &str) -> Result<(), CommandError> {
    check_plugin_name(name)?;

    match load_installed(&ctx.paths.receipts, name)? {
        Some(receipt) => {
            let version = receipt.version().unwrap_or("unversioned");
            println!("{}: {} {}", name.bold(), "installed".green(), version.dimmed());
        }
        None => {
            println!("{}: {}", name.bold(), "not installed".yellow());
        }
    }
    Ok(())
}

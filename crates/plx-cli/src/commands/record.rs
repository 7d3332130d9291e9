use colored::Colorize;
use plx_config::Paths;
use plx_manifest::{host_labels, load_plugin_by_name, Labels, PluginManifest};
use plx_receipt::{load_installed, receipt_path, store};
use tracing::debug;

use super::check_plugin_name;
use crate::context::PlxContext;
use crate::errors::CommandError;

/// What `record` did with the receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No receipt existed before
    Created,
    /// A receipt existed and was replaced by the current index manifest
    Updated { previous_version: Option<String> },
    /// The existing receipt already equals the index manifest
    Unchanged,
}

/// Resolve `name` in the index and store its receipt
///
/// Fails when no platform of the manifest matches `labels`; nothing is written
/// in that case.
pub fn record(
    paths: &Paths,
    name: &str,
    labels: &Labels,
) -> Result<(PluginManifest, RecordOutcome), CommandError> {
    check_plugin_name(name)?;

    let manifest = load_plugin_by_name(&paths.index, name)?;
    let platform = manifest
        .matching_platform(labels)
        .ok_or_else(|| CommandError::NoMatchingPlatform {
            name: name.to_string(),
            os: labels.get("os").cloned().unwrap_or_default(),
            arch: labels.get("arch").cloned().unwrap_or_default(),
        })?;
    debug!("Selected platform {} for '{}'", platform.uri, name);

    paths.ensure_dirs()?;
    let dest = receipt_path(&paths.receipts, name);

    let outcome = match load_installed(&paths.receipts, name)? {
        Some(existing) if existing == manifest => return Ok((manifest, RecordOutcome::Unchanged)),
        Some(existing) => RecordOutcome::Updated {
            previous_version: existing.version().map(str::to_string),
        },
        None => RecordOutcome::Created,
    };

    store(&manifest, &dest)?;
    Ok((manifest, outcome))
}

pub fn record_plugin(ctx: &PlxContext, name: &str) -> Result<(), CommandError> {
    let labels = host_labels();
    let (manifest, outcome) = record(&ctx.paths, name, &labels)?;
    let version = manifest.version().unwrap_or("unversioned");

    match outcome {
        RecordOutcome::Created => {
            plx_logger::success(&format!("Recorded {} {}", name, version));
            println!(" {} {} {}", "+".bold().green(), name.bold(), version.dimmed());
        }
        RecordOutcome::Updated { previous_version } => {
            let previous = previous_version.as_deref().unwrap_or("unversioned");
            plx_logger::success(&format!("Updated receipt for {}", name));
            println!(
                " {} {} {} -> {}",
                "~".bold().yellow(),
                name.bold(),
                previous.dimmed(),
                version
            );
        }
        RecordOutcome::Unchanged => {
            println!("{} {} is already recorded", name.bold(), version.dimmed());
        }
    }

    Ok(())
}

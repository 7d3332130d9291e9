use colored::Colorize;
use plx_config::Paths;
use plx_manifest::{load_plugin_by_name, PluginManifest};
use plx_receipt::load_installed;

use super::check_plugin_name;
use crate::context::PlxContext;
use crate::errors::CommandError;

/// Result of comparing a receipt with the current index entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    UpToDate,
    Differs { changes: Vec<String> },
    MissingFromIndex,
}

/// Human readable differences between the recorded and the indexed manifest
fn describe_changes(recorded: &PluginManifest, indexed: &PluginManifest) -> Vec<String> {
    let mut changes = Vec::new();

    if recorded.version() != indexed.version() {
        changes.push(format!(
            "version {} -> {}",
            recorded.version().unwrap_or("unversioned"),
            indexed.version().unwrap_or("unversioned")
        ));
    }
    if recorded.platforms().len() != indexed.platforms().len() {
        changes.push(format!(
            "platforms {} -> {}",
            recorded.platforms().len(),
            indexed.platforms().len()
        ));
    } else {
        for (idx, (old, new)) in recorded
            .platforms()
            .iter()
            .zip(indexed.platforms())
            .enumerate()
        {
            if old.sha256 != new.sha256 || old.uri != new.uri {
                changes.push(format!("platform #{idx} artifact changed"));
            } else if old != new {
                changes.push(format!("platform #{idx} install rules changed"));
            }
        }
    }
    if changes.is_empty() && recorded != indexed {
        changes.push("descriptive metadata changed".to_string());
    }

    changes
}

pub fn verify(paths: &Paths, name: &str) -> Result<VerifyOutcome, CommandError> {
    check_plugin_name(name)?;

    let recorded = load_installed(&paths.receipts, name)?
        .ok_or_else(|| CommandError::NotInstalled(name.to_string()))?;

    let indexed = match load_plugin_by_name(&paths.index, name) {
        Ok(manifest) => manifest,
        Err(e) if e.is_not_found() => return Ok(VerifyOutcome::MissingFromIndex),
        Err(e) => return Err(e.into()),
    };

    if recorded == indexed {
        Ok(VerifyOutcome::UpToDate)
    } else {
        Ok(VerifyOutcome::Differs {
            changes: describe_changes(&recorded, &indexed),
        })
    }
}

pub fn verify_plugin(ctx: &PlxContext, name: &str) -> Result<(), CommandError> {
    match verify(&ctx.paths, name)? {
        VerifyOutcome::UpToDate => println!("{}: {}", name.bold(), "up to date".green()),
        VerifyOutcome::Differs { changes } => {
            println!("{}: {}", name.bold(), "differs from index".yellow());
            for change in changes {
                println!("    - {}", change);
            }
        }
        VerifyOutcome::MissingFromIndex => {
            println!("{}: {}", name.bold(), "no longer in index".red());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{index_plugin, publish};
    use plx_receipt::{receipt_path, store};
    use tempfile::TempDir;

    fn installed(paths: &Paths, manifest: &PluginManifest) -> bool {
        paths.ensure_dirs().is_ok()
            && store(manifest, &receipt_path(&paths.receipts, manifest.name())).is_ok()
    }

    #[test]
    fn test_verify_up_to_date() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let paths = Paths::new(temp_dir.path());
        let manifest = index_plugin("foo", "linux", "amd64");
        assert!(publish(&paths, &manifest));
        assert!(installed(&paths, &manifest));

        assert!(verify(&paths, "foo").is_ok_and(|o| o == VerifyOutcome::UpToDate));
    }

    #[test]
    fn test_verify_reports_changes() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let paths = Paths::new(temp_dir.path());
        let manifest = index_plugin("foo", "linux", "amd64");
        assert!(installed(&paths, &manifest));

        let mut newer = manifest.clone();
        newer.spec.version = Some("v1.1.0".to_string());
        newer.spec.platforms[0].sha256 = "1".repeat(64);
        assert!(publish(&paths, &newer));

        let outcome = verify(&paths, "foo");
        assert!(outcome.is_ok_and(|o| o
            == VerifyOutcome::Differs {
                changes: vec![
                    "version v1.0.0 -> v1.1.0".to_string(),
                    "platform #0 artifact changed".to_string(),
                ]
            }));
    }

    #[test]
    fn test_verify_metadata_only_change() {
        let recorded = index_plugin("foo", "linux", "amd64");
        let mut indexed = recorded.clone();
        indexed.spec.homepage = Some("https://example.com/foo".to_string());

        assert_eq!(
            describe_changes(&recorded, &indexed),
            vec!["descriptive metadata changed".to_string()]
        );
    }

    #[test]
    fn test_verify_missing_from_index() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let paths = Paths::new(temp_dir.path());
        assert!(installed(&paths, &index_plugin("foo", "linux", "amd64")));

        assert!(verify(&paths, "foo").is_ok_and(|o| o == VerifyOutcome::MissingFromIndex));
    }

    #[test]
    fn test_verify_not_installed() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let paths = Paths::new(temp_dir.path());
        assert!(publish(&paths, &index_plugin("foo", "linux", "amd64")));

        assert!(matches!(verify(&paths, "foo"), Err(CommandError::NotInstalled(_))));
    }
}

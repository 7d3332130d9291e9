use plx_manifest::validation::is_safe_plugin_name;
use plx_manifest::ManifestError;

use crate::errors::CommandError;

pub mod config;
pub mod list;
pub mod record;
pub mod remove;
pub mod show;
pub mod status;
pub mod verify;

pub use list::list_plugins;
pub use record::record_plugin;
pub use remove::remove_plugin;
pub use show::show_receipt;
pub use status::plugin_status;
pub use verify::verify_plugin;

/// Reject names that could escape the receipts or store directories
pub(crate) fn check_plugin_name(name: &str) -> Result<(), CommandError> {
    if is_safe_plugin_name(name) {
        Ok(())
    } else {
        Err(ManifestError::InvalidName(name.to_string()).into())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use plx_config::Paths;
    use plx_manifest::{manifest_path, FileOperation, Platform, PluginManifest, Selector};
    use std::fs;

    pub fn index_plugin(name: &str, os: &str, arch: &str) -> PluginManifest {
        let mut manifest = PluginManifest::new(
            name,
            vec![Platform {
                selector: Some(Selector::for_os_arch(os, arch)),
                uri: format!("https://example.com/{name}-{os}-{arch}.tar.gz"),
                sha256: "9".repeat(64),
                files: vec![FileOperation::new(name, ".")],
                bin: name.to_string(),
            }],
        );
        manifest.spec.version = Some("v1.0.0".to_string());
        manifest.spec.short_description = Some(format!("The {name} plugin"));
        manifest
    }

    /// Write `manifest` into the index; returns false if the fixture could not be created
    pub fn publish(paths: &Paths, manifest: &PluginManifest) -> bool {
        fs::create_dir_all(&paths.index).is_ok()
            && serde_yaml::to_string(manifest)
                .ok()
                .and_then(|yaml| fs::write(manifest_path(&paths.index, manifest.name()), yaml).ok())
                .is_some()
    }
}

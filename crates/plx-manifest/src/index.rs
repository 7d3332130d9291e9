//! Local plugin index scanning
//!
//! An index directory holds one `<name>.yaml` manifest per plugin. Lookups by
//! name validate both the requested name and the manifest found on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::errors::ManifestError;
use crate::types::PluginManifest;
use crate::validation::is_safe_plugin_name;

/// File extension used for index manifests and receipts
pub const MANIFEST_EXTENSION: &str = "yaml";

/// Path of the manifest for `name` inside `dir`
pub fn manifest_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{MANIFEST_EXTENSION}"))
}

/// Parse a single manifest file without validating it
pub fn read_plugin_file(path: &Path) -> Result<PluginManifest, ManifestError> {
    let content =
        fs::read_to_string(path).map_err(|e| ManifestError::from_io(path.to_path_buf(), e))?;
    serde_yaml::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Look up and validate the plugin called `name` in `index_dir`
pub fn load_plugin_by_name(index_dir: &Path, name: &str) -> Result<PluginManifest, ManifestError> {
    if !is_safe_plugin_name(name) {
        return Err(ManifestError::InvalidName(name.to_string()));
    }

    let path = manifest_path(index_dir, name);
    debug!("Reading plugin manifest: {:?}", path);
    let manifest = read_plugin_file(&path)?;

    if manifest.name() != name {
        return Err(ManifestError::Invalid {
            name: name.to_string(),
            reason: format!(
                "metadata.name '{}' does not match file name {:?}",
                manifest.name(),
                path.file_name().unwrap_or_default()
            ),
        });
    }

    manifest.validate()?;
    Ok(manifest)
}

/// Load every valid manifest in `index_dir`, sorted by name
///
/// Files that fail to parse or validate are skipped with a warning so that one
/// broken entry does not hide the rest of the index.
pub fn load_plugins_from(index_dir: &Path) -> Result<Vec<PluginManifest>, ManifestError> {
    let meta =
        fs::metadata(index_dir).map_err(|e| ManifestError::from_io(index_dir.to_path_buf(), e))?;
    if !meta.is_dir() {
        return Err(ManifestError::Io {
            path: index_dir.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let mut plugins = Vec::new();
    for entry in WalkDir::new(index_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(MANIFEST_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match load_plugin_by_name(index_dir, name) {
            Ok(manifest) => plugins.push(manifest),
            Err(e) => warn!("Skipping index entry {:?}: {}", path, e),
        }
    }

    plugins.sort_by(|a, b| a.name().cmp(b.name()));
    info!("Loaded {} plugin(s) from {:?}", plugins.len(), index_dir);
    Ok(plugins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileOperation, Platform, Selector};
    use tempfile::TempDir;

    fn valid_manifest(name: &str) -> PluginManifest {
        PluginManifest::new(
            name,
            vec![Platform {
                selector: Some(Selector::for_os_arch("linux", "amd64")),
                uri: format!("https://example.com/{name}.tar.gz"),
                sha256: "ab".repeat(32),
                files: vec![FileOperation::new(name, ".")],
                bin: name.to_string(),
            }],
        )
    }

    fn write_manifest(dir: &Path, file_stem: &str, manifest: &PluginManifest) -> bool {
        serde_yaml::to_string(manifest)
            .ok()
            .and_then(|yaml| fs::write(manifest_path(dir, file_stem), yaml).ok())
            .is_some()
    }

    #[test]
    fn test_load_plugin_by_name() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let manifest = valid_manifest("foo");
        assert!(write_manifest(temp_dir.path(), "foo", &manifest));

        let loaded = load_plugin_by_name(temp_dir.path(), "foo");
        assert!(loaded.is_ok_and(|m| m == manifest));
    }

    #[test]
    fn test_load_plugin_by_name_missing() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = load_plugin_by_name(temp_dir.path(), "foo");
        assert!(result.is_err_and(|e| e.is_not_found()));
    }

    #[test]
    fn test_load_plugin_by_name_rejects_traversal() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = load_plugin_by_name(temp_dir.path(), "../foo");
        assert!(matches!(result, Err(ManifestError::InvalidName(_))));
    }

    #[test]
    fn test_load_plugin_by_name_checks_metadata_name() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        assert!(write_manifest(temp_dir.path(), "bar", &valid_manifest("foo")));

        let result = load_plugin_by_name(temp_dir.path(), "bar");
        assert!(matches!(result, Err(ManifestError::Invalid { .. })));
    }

    #[test]
    fn test_read_plugin_file_malformed() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("broken.yaml");
        assert!(fs::write(&path, "metadata: [unclosed").is_ok());

        let result = read_plugin_file(&path);
        assert!(matches!(result, Err(ManifestError::Parse { .. })));
    }

    #[test]
    fn test_load_plugins_from_skips_invalid() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let dir = temp_dir.path();
        assert!(write_manifest(dir, "zeta", &valid_manifest("zeta")));
        assert!(write_manifest(dir, "alpha", &valid_manifest("alpha")));
        assert!(write_manifest(dir, "empty", &PluginManifest::new("empty", Vec::new())));
        assert!(fs::write(dir.join("garbage.yaml"), "::: not yaml").is_ok());
        assert!(fs::write(dir.join("README.md"), "# index").is_ok());

        let Ok(plugins) = load_plugins_from(dir) else {
            panic!("index scan failed");
        };
        let names: Vec<&str> = plugins.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_load_plugins_from_missing_dir() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = load_plugins_from(&temp_dir.path().join("nope"));
        assert!(result.is_err_and(|e| e.is_not_found()));
    }
}

//! Plugin manifest record types
//!
//! These structs are the on-disk schema for both index manifests and install
//! receipts. Field names are serialized in camelCase and must stay stable:
//! receipts written by one release are read back by the next one without any
//! migration step.
//!
//! Optional fields are skipped when absent so that a value read back from disk
//! never gains defaults it did not have when it was written.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API version written into every manifest created by plx.
pub const API_VERSION: &str = "plx.dev/v1alpha1";

/// Kind tag for plugin manifests.
pub const PLUGIN_KIND: &str = "Plugin";

// =============================================================================
// PLUGIN MANIFEST
// =============================================================================

/// A plugin as described by the index and recorded in receipts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: PluginSpec,
}

impl PluginManifest {
    /// Create a manifest with the current API version and the given platforms.
    pub fn new(name: impl Into<String>, platforms: Vec<Platform>) -> Self {
        PluginManifest {
            api_version: API_VERSION.to_string(),
            kind: PLUGIN_KIND.to_string(),
            metadata: Metadata { name: name.into() },
            spec: PluginSpec {
                platforms,
                ..PluginSpec::default()
            },
        }
    }

    /// Unique plugin identifier
    #[inline]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Platform variants in declaration order
    #[inline]
    pub fn platforms(&self) -> &[Platform] {
        &self.spec.platforms
    }

    /// Version string, if the manifest declares one
    pub fn version(&self) -> Option<&str> {
        self.spec.version.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

/// Descriptive fields and the per-platform install instructions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caveats: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

// =============================================================================
// PLATFORM
// =============================================================================

/// One OS/architecture specific variant of a plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    pub uri: String,
    pub sha256: String,
    #[serde(default)]
    pub files: Vec<FileOperation>,
    pub bin: String,
}

/// Copy rule applied after the artifact has been unpacked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperation {
    pub from: String,
    pub to: String,
}

impl FileOperation {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        FileOperation {
            from: from.into(),
            to: to.into(),
        }
    }
}

// =============================================================================
// SELECTOR
// =============================================================================

/// Label selector used to pick a platform for the running host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_expressions: Vec<SelectorRequirement>,
}

impl Selector {
    /// Selector requiring exact `os` and `arch` labels
    pub fn for_os_arch(os: &str, arch: &str) -> Self {
        let mut match_labels = BTreeMap::new();
        match_labels.insert("os".to_string(), os.to_string());
        match_labels.insert("arch".to_string(), arch.to_string());
        Selector {
            match_labels,
            match_expressions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorRequirement {
    pub key: String,
    pub operator: SelectorOperator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

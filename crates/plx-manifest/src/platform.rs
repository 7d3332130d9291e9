//! Host detection and platform selection
//!
//! Labels use Go-style names (`linux`/`darwin`/`windows`, `amd64`/`arm64`)
//! so that index manifests can be shared with other tooling.

use std::collections::BTreeMap;
use tracing::debug;

use crate::types::{Platform, PluginManifest, Selector, SelectorOperator};

/// Environment variable overriding the detected operating system
pub const OS_OVERRIDE_ENV: &str = "PLX_OS";
/// Environment variable overriding the detected architecture
pub const ARCH_OVERRIDE_ENV: &str = "PLX_ARCH";

pub type Labels = BTreeMap<String, String>;

/// Map a Rust target OS name to the label value used in manifests
pub fn os_label(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust target architecture name to the label value used in manifests
pub fn arch_label(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    }
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Labels describing the running host: `os` and `arch`
pub fn host_labels() -> Labels {
    let os = env_override(OS_OVERRIDE_ENV)
        .unwrap_or_else(|| os_label(std::env::consts::OS).to_string());
    let arch = env_override(ARCH_OVERRIDE_ENV)
        .unwrap_or_else(|| arch_label(std::env::consts::ARCH).to_string());
    debug!("Host labels: os={}, arch={}", os, arch);

    let mut labels = Labels::new();
    labels.insert("os".to_string(), os);
    labels.insert("arch".to_string(), arch);
    labels
}

impl Selector {
    /// An empty selector matches every label set.
    pub fn matches(&self, labels: &Labels) -> bool {
        let labels_match = self
            .match_labels
            .iter()
            .all(|(key, value)| labels.get(key) == Some(value));

        labels_match
            && self.match_expressions.iter().all(|req| {
                let current = labels.get(&req.key);
                match req.operator {
                    SelectorOperator::In => current.is_some_and(|v| req.values.contains(v)),
                    SelectorOperator::NotIn => !current.is_some_and(|v| req.values.contains(v)),
                    SelectorOperator::Exists => current.is_some(),
                    SelectorOperator::DoesNotExist => current.is_none(),
                }
            })
    }
}

impl PluginManifest {
    /// First platform, in declaration order, whose selector matches `labels`
    pub fn matching_platform(&self, labels: &Labels) -> Option<&Platform> {
        self.platforms().iter().find(|platform| {
            platform
                .selector
                .as_ref()
                .map_or(true, |selector| selector.matches(labels))
        })
    }
}

//! Semantic checks for plugin manifests read from the index
//!
//! The receipt store never calls into this module: receipts are recorded
//! verbatim. Validation happens once, when a manifest is pulled from the index.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ManifestError;
use crate::types::{
    Platform, PluginManifest, Selector, SelectorOperator, API_VERSION, PLUGIN_KIND,
};

/// Lowercase alphanumeric words joined by single dashes
static NAME_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").ok());

/// Check whether `name` is usable as a plugin name and as a file stem.
pub fn is_safe_plugin_name(name: &str) -> bool {
    NAME_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

fn is_sha256_hex(value: &str) -> bool {
    value.len() == 64 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

impl PluginManifest {
    /// Validate the manifest, returning the first problem found
    pub fn validate(&self) -> Result<(), ManifestError> {
        let name = self.name();
        if !is_safe_plugin_name(name) {
            return Err(ManifestError::InvalidName(name.to_string()));
        }

        let invalid = |reason: String| ManifestError::Invalid {
            name: name.to_string(),
            reason,
        };

        if self.api_version != API_VERSION {
            return Err(invalid(format!(
                "apiVersion is '{}', expected '{}'",
                self.api_version, API_VERSION
            )));
        }
        if self.kind != PLUGIN_KIND {
            return Err(invalid(format!(
                "kind is '{}', expected '{}'",
                self.kind, PLUGIN_KIND
            )));
        }
        if self.platforms().is_empty() {
            return Err(invalid("no platforms declared".to_string()));
        }

        for (idx, platform) in self.platforms().iter().enumerate() {
            validate_platform(platform).map_err(|reason| invalid(format!("platform #{idx}: {reason}")))?;
        }

        Ok(())
    }
}

fn validate_platform(platform: &Platform) -> Result<(), String> {
    let selector = platform
        .selector
        .as_ref()
        .ok_or_else(|| "selector is missing".to_string())?;
    validate_selector(selector)?;

    if platform.uri.trim().is_empty() {
        return Err("uri is empty".to_string());
    }
    if !is_sha256_hex(&platform.sha256) {
        return Err(format!(
            "sha256 '{}' is not a 64 character hex digest",
            platform.sha256
        ));
    }
    if platform.files.is_empty() {
        return Err("no file operations".to_string());
    }
    if let Some(op) = platform
        .files
        .iter()
        .find(|op| op.from.is_empty() || op.to.is_empty())
    {
        return Err(format!(
            "file operation from '{}' to '{}' has an empty side",
            op.from, op.to
        ));
    }
    if platform.bin.trim().is_empty() {
        return Err("bin is empty".to_string());
    }

    Ok(())
}

fn validate_selector(selector: &Selector) -> Result<(), String> {
    for req in &selector.match_expressions {
        match req.operator {
            SelectorOperator::In | SelectorOperator::NotIn if req.values.is_empty() => {
                return Err(format!(
                    "selector key '{}': {:?} requires values",
                    req.key, req.operator
                ));
            }
            SelectorOperator::Exists | SelectorOperator::DoesNotExist if !req.values.is_empty() => {
                return Err(format!(
                    "selector key '{}': {:?} takes no values",
                    req.key, req.operator
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

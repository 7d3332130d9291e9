//! plx manifest model
//!
//! Types describing a plugin and its per-platform install instructions, plus
//! the local index scanner that produces validated manifests.
//!
//! The same record types are written verbatim into install receipts by
//! `plx-receipt`, so every field here is part of the on-disk schema.

pub mod errors;
pub mod index;
pub mod platform;
pub mod types;
pub mod validation;

pub use errors::ManifestError;
pub use index::{load_plugin_by_name, load_plugins_from, manifest_path, read_plugin_file};
pub use platform::{host_labels, Labels};
pub use types::{
    FileOperation, Metadata, Platform, PluginManifest, PluginSpec, Selector, SelectorOperator,
    SelectorRequirement, API_VERSION, PLUGIN_KIND,
};

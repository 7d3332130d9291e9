//! plx configuration
//!
//! Resolves the plx root directory, the optional `plx.toml` config file and
//! the directory layout derived from both.

pub mod config;
pub mod errors;
pub mod paths;

pub use config::Config;
pub use errors::ConfigError;
pub use paths::{root_dir, Paths};

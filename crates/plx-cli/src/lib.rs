//! plx library - expose command handlers for the binary and for testing

pub mod commands;
pub mod common;
pub mod context;
pub mod errors;

pub use common::GlobalOpts;

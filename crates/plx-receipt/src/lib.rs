//! plx installation receipts
//!
//! A receipt is the exact plugin manifest that was used to install a plugin,
//! written to a single YAML file at install time. Reading it back yields a
//! value equal to the one stored, so status and uninstall workflows never
//! need to consult the index again.
//!
//! Callers tell "not installed" apart from real failures through
//! [`ReceiptError::is_not_found`].

pub mod errors;
pub mod installed;
pub mod receipt;

pub use errors::ReceiptError;
pub use installed::{is_installed, list_installed, load_installed, receipt_path};
pub use receipt::{load, store};

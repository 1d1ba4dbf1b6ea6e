//! Common Utilities
//!
//! Shared error types, result alias and path helpers.

pub mod error;
pub mod paths;
pub mod result;

pub use error::{ExitStatus, ManifestError};
pub use paths::{home_config_path, LOCAL_CONFIG_FILE};
pub use result::ManifestResult;

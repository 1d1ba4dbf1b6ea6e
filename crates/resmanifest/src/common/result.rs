//! Common Result Type

use super::error::ManifestError;

/// Result of any operation that touches the filesystem
pub type ManifestResult<T> = Result<T, ManifestError>;

//! Common Error Types
//!
//! Errors raised while *loading* inputs. Problems found while *validating* them are
//! reported as [`Violation`](crate::manifest::Violation) values instead.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit status for the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No violations
    Clean = 0,
    /// At least one violation was reported
    Violations = 1,
    /// Inputs could not be loaded
    InputError = 2,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is too large ({size} bytes, max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("release metadata in {path} is unusable: {reason}")]
    Release { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl ManifestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Every load failure maps to the same exit status
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::InputError
    }
}

//! Violations
//!
//! A violation is a single inconsistency between a descriptor and what it claims. They are
//! plain data so a caller can report all of them at once.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A required descriptor field is absent
    MissingField,
    /// A descriptor field is present with the wrong shape
    InvalidField,
    /// `mode` is not a mode the host knows
    UnknownMode,
    /// `onlyWWW` adapter with a mode other than `none`
    ModeMismatch,
    /// `onlyWWW` adapter that declares a runtime entry point
    EntryPointDeclared,
    /// `onlyWWW` adapter that ships no files
    EmptyResourceSet,
    /// `type` outside the recognized set
    UnknownType,
    /// A version string that is not a semantic version
    InvalidVersion,
    /// Descriptor and release metadata disagree on the version
    VersionDrift,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "MissingField",
            Self::InvalidField => "InvalidField",
            Self::UnknownMode => "UnknownMode",
            Self::ModeMismatch => "ModeMismatch",
            Self::EntryPointDeclared => "EntryPointDeclared",
            Self::EmptyResourceSet => "EmptyResourceSet",
            Self::UnknownType => "UnknownType",
            Self::InvalidVersion => "InvalidVersion",
            Self::VersionDrift => "VersionDrift",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub detail: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// `detail` is the bare field name so callers can match on it
    pub fn missing_field(field: &str) -> Self {
        Self::new(ViolationKind::MissingField, field)
    }

    pub fn invalid_field(field: &str, reason: &str) -> Self {
        Self::new(ViolationKind::InvalidField, format!("{}: {}", field, reason))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

/// Kinds of a violation list, in order
pub fn kinds(violations: &[Violation]) -> Vec<ViolationKind> {
    violations.iter().map(|v| v.kind).collect()
}

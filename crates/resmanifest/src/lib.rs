//! Static resource manifest checks
//!
//! An adapter that only ships files for the host's web server (`onlyWWW`) makes a few
//! promises in its descriptor: it never starts a process, it has something to serve, and
//! its release metadata agrees with it. This crate parses those records into typed values
//! and reports every broken promise in one pass.

pub mod common;
pub mod config;
pub mod manifest;

pub use common::{ExitStatus, ManifestError, ManifestResult};
pub use config::Config;
pub use manifest::{
    check_document, validate, validate_with, AdapterDescriptor, AdapterMode, AdapterPackage,
    ReleaseMetadata, ResourceDirectory, ScanOptions, ValidationOptions, Violation, ViolationKind,
    KNOWN_ADAPTER_TYPES,
};

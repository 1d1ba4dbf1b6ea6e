//! Manifest System
//!
//! Parses adapter descriptors, lists shipped resources, and validates the two against each
//! other and the release record.

pub mod loader;
pub mod parse;
pub mod types;
pub mod validator;
pub mod violation;

pub use loader::{
    load_descriptor_value, load_release, read_json, scan_resource_dir, AdapterPackage, ScanOptions,
    MAX_JSON_SIZE,
};
pub use types::{
    AdapterDescriptor, AdapterMode, ReleaseMetadata, ResourceDirectory, KNOWN_ADAPTER_TYPES,
};
pub use validator::{check_document, validate, validate_with, ValidationOptions};
pub use violation::{kinds, Violation, ViolationKind};

//! Manifest Types
//!
//! Typed records for an adapter descriptor, the directory of files it ships, and the
//! release record its version must agree with.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Adapter type tags recognized by the host's repository index
pub const KNOWN_ADAPTER_TYPES: &[&str] = &[
    "alarm",
    "climate-control",
    "communication",
    "date-and-time",
    "energy",
    "garden",
    "general",
    "geoposition",
    "hardware",
    "health",
    "household",
    "infrastructure",
    "iot-systems",
    "lighting",
    "logic",
    "messaging",
    "metering",
    "misc-data",
    "multimedia",
    "network",
    "notifications",
    "protocols",
    "storage",
    "third-party",
    "utility",
    "vehicle",
    "visualization",
    "visualization-icons",
    "visualization-widgets",
    "weather",
];

/// How the host runs the adapter
///
/// Parsing never fails: spellings the host does not know are kept in
/// [`AdapterMode::Unrecognized`] so the validator can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AdapterMode {
    None,
    Daemon,
    Schedule,
    Once,
    Subscribe,
    Extension,
    Unrecognized(String),
}

impl AdapterMode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "none" => Self::None,
            "daemon" => Self::Daemon,
            "schedule" => Self::Schedule,
            "once" => Self::Once,
            "subscribe" => Self::Subscribe,
            "extension" => Self::Extension,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Daemon => "daemon",
            Self::Schedule => "schedule",
            Self::Once => "once",
            Self::Subscribe => "subscribe",
            Self::Extension => "extension",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for AdapterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adapter descriptor
///
/// Built with [`AdapterDescriptor::from_value`] or directly; every field
/// except `main` is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDescriptor {
    pub name: String,
    pub mode: AdapterMode,
    pub only_www: bool,
    pub no_config: bool,
    pub singleton: bool,
    pub adapter_type: String,
    pub version: String,
    /// Runtime entry point, if one is declared
    pub main: Option<String>,
}

/// Files an adapter ships for serving
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDirectory {
    pub root_path: PathBuf,
    /// Paths relative to `root_path`, `/`-separated
    pub files: BTreeSet<String>,
}

impl ResourceDirectory {
    pub fn new<I, S>(root_path: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root_path: root_path.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Release record (`package.json`) that must agree with the descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

impl ReleaseMetadata {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            main: None,
        }
    }

    /// Read the fields this crate cares about out of a full `package.json` document
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

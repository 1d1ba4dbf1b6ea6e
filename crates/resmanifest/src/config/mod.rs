//! Configuration management
//!
//! Where to find the descriptor, release record and resource directory inside an adapter
//! checkout, plus any extra adapter type tags to accept.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::common::{home_config_path, ManifestError, ManifestResult, LOCAL_CONFIG_FILE};
use crate::manifest::{read_json, ScanOptions, ValidationOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    pub descriptor_file: String,
    pub release_file: String,
    pub resource_dir: String,
    pub extra_types: Vec<String>,
    pub skip_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptor_file: "io-package.json".to_string(),
            release_file: "package.json".to_string(),
            resource_dir: "www".to_string(),
            extra_types: Vec::new(),
            skip_hidden: true,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> ManifestResult<Self> {
        let value = read_json(path)?;
        serde_json::from_value(value)
            .map_err(|e| ManifestError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the config for an adapter checkout
    ///
    /// Precedence: `explicit`, then `<adapter_root>/.resmanifest.json`, then
    /// `~/.resmanifest/config.json`, then defaults. Returns the file used, if any.
    pub fn resolve(
        explicit: Option<&Path>,
        adapter_root: &Path,
    ) -> ManifestResult<(Self, Option<PathBuf>)> {
        Self::resolve_from(explicit, adapter_root, home_config_path().as_deref())
    }

    pub fn resolve_from(
        explicit: Option<&Path>,
        adapter_root: &Path,
        home_config: Option<&Path>,
    ) -> ManifestResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            // An explicit path must exist
            let config = Self::from_file(path)?;
            info!("Using config {:?}", path);
            return Ok((config, Some(path.to_path_buf())));
        }

        let local = adapter_root.join(LOCAL_CONFIG_FILE);
        let candidates = std::iter::once(local).chain(home_config.map(Path::to_path_buf));
        for candidate in candidates {
            if candidate.is_file() {
                let config = Self::from_file(&candidate)?;
                info!("Using config {:?}", candidate);
                return Ok((config, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            extra_types: self.extra_types.clone(),
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            skip_hidden: self.skip_hidden,
        }
    }
}

//! Manifest Loader
//!
//! Reads descriptor and release JSON files and lists the resource directory. This is the
//! only part of the crate that touches the filesystem; its output feeds the validator.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::{ReleaseMetadata, ResourceDirectory};
use super::validator::{check_document, ValidationOptions};
use super::violation::Violation;
use crate::common::{ManifestError, ManifestResult};
use crate::config::Config;

/// Largest JSON file the loader will read
pub const MAX_JSON_SIZE: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip dotfiles and editor temp files (`.tmp`, `.swp`)
    pub skip_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { skip_hidden: true }
    }
}

/// Read a JSON file (max 1MB)
pub fn read_json(path: &Path) -> ManifestResult<Value> {
    let metadata = fs::metadata(path).map_err(|e| ManifestError::io(path, e))?;
    if metadata.len() > MAX_JSON_SIZE {
        return Err(ManifestError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_JSON_SIZE,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ManifestError::json(path, e))
}

/// Load the raw descriptor document; typing happens in the validator
pub fn load_descriptor_value(path: &Path) -> ManifestResult<Value> {
    let value = read_json(path)?;
    debug!("Read descriptor {:?}", path);
    Ok(value)
}

pub fn load_release(path: &Path) -> ManifestResult<ReleaseMetadata> {
    let value = read_json(path)?;
    let release = ReleaseMetadata::from_value(value).map_err(|e| ManifestError::Release {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("Read release metadata {:?} (version {})", path, release.version);
    Ok(release)
}

/// List every file under `root` (recursive)
///
/// A missing directory is an empty resource set, not an error. Symlinked directories are
/// not descended into; symlinks to files count as files.
pub fn scan_resource_dir(root: &Path, options: &ScanOptions) -> ManifestResult<ResourceDirectory> {
    let mut directory = ResourceDirectory {
        root_path: root.to_path_buf(),
        ..Default::default()
    };

    if !root.exists() {
        // Reported as EmptyResourceSet by the validator
        info!("Resource directory does not exist: {:?}", root);
        return Ok(directory);
    }
    if !root.is_dir() {
        return Err(ManifestError::NotADirectory(root.to_path_buf()));
    }

    scan_recursive(root, root, options, &mut directory)?;

    info!(
        "Found {} resource files under {:?}",
        directory.len(),
        root
    );
    Ok(directory)
}

fn scan_recursive(
    root: &Path,
    dir: &Path,
    options: &ScanOptions,
    directory: &mut ResourceDirectory,
) -> ManifestResult<()> {
    let entries = fs::read_dir(dir).map_err(|e| ManifestError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| ManifestError::io(dir, e))?;
        let path = entry.path();

        if options.skip_hidden && is_hidden(&path) {
            debug!("Skipping {:?}", path);
            continue;
        }

        let file_type = entry.file_type().map_err(|e| ManifestError::io(&path, e))?;
        if file_type.is_dir() {
            scan_recursive(root, &path, options, directory)?;
        } else if file_type.is_symlink() && !path.is_file() {
            debug!("Skipping symlink {:?} (directory or dangling)", path);
        } else {
            directory.files.insert(relative_id(root, &path));
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.starts_with('.') || name.ends_with(".tmp") || name.ends_with(".swp"))
        .unwrap_or(false)
}

/// Non-UTF-8 names are kept, lossily converted
fn relative_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

/// Everything read from one adapter checkout
#[derive(Debug, Clone)]
pub struct AdapterPackage {
    pub root: PathBuf,
    pub descriptor: Value,
    pub release: ReleaseMetadata,
    pub resources: ResourceDirectory,
}

impl AdapterPackage {
    /// Load descriptor, release record and resource directory from `root`
    pub fn load(root: &Path, config: &Config) -> ManifestResult<Self> {
        let descriptor = load_descriptor_value(&root.join(&config.descriptor_file))?;
        let release = load_release(&root.join(&config.release_file))?;
        let resources = scan_resource_dir(&root.join(&config.resource_dir), &config.scan_options())?;

        let package = Self {
            root: root.to_path_buf(),
            descriptor,
            release,
            resources,
        };
        info!(
            "Loaded adapter {} from {:?}",
            package.adapter_name().unwrap_or("<unnamed>"),
            root
        );
        Ok(package)
    }

    /// Best-effort name, for reporting even when the descriptor is malformed
    pub fn adapter_name(&self) -> Option<&str> {
        self.descriptor
            .get("common")
            .and_then(|c| c.get("name"))
            .or_else(|| self.descriptor.get("name"))
            .and_then(Value::as_str)
    }

    pub fn check(&self, options: &ValidationOptions) -> Result<(), Vec<Violation>> {
        check_document(&self.descriptor, &self.resources, &self.release, options)
    }
}

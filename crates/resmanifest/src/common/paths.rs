//! Path Utilities
//!
//! Locations of the per-user and per-adapter configuration files.

use std::path::PathBuf;

/// Config file looked up in the adapter root before the per-user one
pub const LOCAL_CONFIG_FILE: &str = ".resmanifest.json";

/// Get the per-user base directory (`~/.resmanifest/`)
pub(crate) fn resmanifest_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".resmanifest"))
}

/// Get the per-user config file (`~/.resmanifest/config.json`)
pub fn home_config_path() -> Option<PathBuf> {
    resmanifest_dir().map(|dir| dir.join("config.json"))
}

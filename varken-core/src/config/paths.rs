//! Config file path resolution
//!
//! Explicit path, then `VARKEN_CONFIG`, then `./varken.ini`, then the XDG
//! config directory.

use std::path::{Path, PathBuf};

/// File name of the Varken configuration file.
pub const CONFIG_FILE_NAME: &str = "varken.ini";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "VARKEN_CONFIG";

/// Returns the default path for the configuration file.
///
/// Uses XDG config directory if available:
/// - Linux/macOS: `~/.config/varken/varken.ini`
/// - Fallback: `/etc/varken/varken.ini`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/etc"))
        .join("varken")
        .join(CONFIG_FILE_NAME)
}

/// Resolve the config file to load.
///
/// The returned path is not guaranteed to exist; a missing file is reported
/// when it is opened.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return local;
    }

    default_config_path()
}

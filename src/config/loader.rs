//! Settings file discovery and loading.

use crate::config::settings::Settings;
use crate::error::{CmdocError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file: `<config dir>/cmdoc/config.yml`.
pub fn default_settings_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("cmdoc").join("config.yml"))
}

/// Load settings.
///
/// An explicit path must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    match default_settings_path() {
        Some(path) if path.is_file() => load_settings_file(&path),
        _ => {
            tracing::debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Load a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CmdocError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CmdocError::Io(e)
        }
    })?;

    tracing::debug!("Loading settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| CmdocError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

//! Registry file loading.
//!
//! Reads a registry file from disk and parses it into a [`RegistryFile`].
//! All failures here are config errors: a missing file is
//! [`IconError::ConfigNotFound`], anything unreadable or malformed is
//! [`IconError::ConfigParseError`].

use crate::config::schema::RegistryFile;
use crate::error::{IconError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default registry file name, looked up in the working directory.
pub const DEFAULT_REGISTRY_FILE: &str = "icons.yaml";

/// Load a registry file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if it can't be read or the YAML is invalid.
pub fn load_registry_file(path: &Path) -> Result<RegistryFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IconError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IconError::ConfigParseError {
                path: path.to_path_buf(),
                message: format!("unreadable: {}", e),
            }
        }
    })?;

    parse_registry(&content, path)
}

/// Parse YAML content into a [`RegistryFile`].
///
/// `source_path` is only used for error reporting. An empty document is a
/// valid, empty registry.
pub fn parse_registry(content: &str, source_path: &Path) -> Result<RegistryFile> {
    if content.trim().is_empty() {
        return Ok(RegistryFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| IconError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Directory that relative paths in a registry file are resolved against.
pub fn base_dir_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

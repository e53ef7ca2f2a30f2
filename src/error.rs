//! Error types for icon resolution.
//!
//! This module defines [`IconError`], the error type used throughout the
//! engine, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure mode has its own variant so callers can branch on it
//! - Config errors are fatal and surface before any rendering is attempted
//! - Per-icon errors (`IconSyntax`, `UnknownSource`) never abort a batch
//! - `Network` and `Timeout` are retryable; `NotFound` is a confirmed miss
//! - Use `anyhow::Error` (via `IconError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for icon operations.
#[derive(Debug, Error)]
pub enum IconError {
    /// Registry file not found at the given location.
    #[error("Registry not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Registry file could not be parsed.
    #[error("Failed to parse registry at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Registry parsed but its contents are invalid.
    #[error("Invalid registry: {message}")]
    ConfigValidationError { message: String },

    /// Icon reference has no `prefix:name` delimiter or an unusable name.
    #[error("Invalid icon reference '{reference}': expected 'prefix:name'")]
    IconSyntax { reference: String },

    /// No source is registered for the reference's prefix.
    #[error("Unknown icon source '{prefix}'")]
    UnknownSource { prefix: String },

    /// A local SVG file does not exist.
    #[error("Icon file not found: {path}")]
    IconFileNotFound { path: PathBuf },

    /// A source type outside the supported set.
    #[error("Unsupported source type '{kind}'")]
    UnsupportedType { kind: String },

    /// Transport-level failure talking to a remote endpoint.
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// A remote call exceeded its deadline and was aborted.
    #[error("Timed out after {timeout_ms}ms fetching {url}")]
    Timeout { url: String, timeout_ms: u64 },

    /// The remote endpoint answered with a non-success status.
    #[error("Icon {reference} not found (HTTP {status})")]
    NotFound { reference: String, status: u16 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Whether this error comes from loading or validating the registry.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }

    /// Whether retrying the same operation could succeed.
    ///
    /// A confirmed miss (`NotFound`) is never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, IconError>;

//! Error types for Stowage operations.
//!
//! This module defines [`StowageError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Template lookups fail with exactly one kind: [`StowageError::TemplateNotFound`]
//! - Locator failures (`PackageNotFound`, `InvalidPackage`, `InvalidResource`)
//!   never reach callers
//!   of the resolver; the existence check turns them into "not found"
//! - Use `anyhow::Error` (via `StowageError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Stowage operations.
#[derive(Debug, Error)]
pub enum StowageError {
    /// No configured provider supplies the requested template.
    #[error("Could not locate template \"{name}\" in any loaded template provider: [{list}]", list = .providers.join(", "))]
    TemplateNotFound {
        name: String,
        providers: Vec<String>,
    },

    /// A dotted package location does not exist under any search root.
    #[error("Package not found: {package}")]
    PackageNotFound { package: String },

    /// A dotted package location is malformed.
    #[error("Invalid package location '{package}': {reason}")]
    InvalidPackage { package: String, reason: String },

    /// A resource name cannot be mapped onto a file inside its package.
    #[error("Invalid resource '{resource}' in package '{package}': {reason}")]
    InvalidResource {
        package: String,
        resource: String,
        reason: String,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Stowage operations.
pub type Result<T> = std::result::Result<T, StowageError>;

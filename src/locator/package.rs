//! Dotted package locations.

use crate::error::{Result, StowageError};
use std::fmt;
use std::path::PathBuf;

/// A validated dotted package location such as `base_app.templates`.
///
/// Each segment maps to one directory level below a search root, so a
/// segment may not be empty or contain path separators. Splitting on
/// `.` already rules out `.` and `..` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Parse and validate a dotted package location.
    pub fn parse(package: &str) -> Result<Self> {
        for segment in package.split('.') {
            check_segment(package, segment)?;
        }
        Ok(Self(package.to_string()))
    }

    /// Nested package `<self>.<suffix>`; the suffix may itself be dotted.
    pub fn join(&self, suffix: &str) -> Result<Self> {
        Self::parse(&format!("{}.{}", self.0, suffix))
    }

    /// The dotted location as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the package segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Directory of this package relative to a search root.
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_segment(package: &str, segment: &str) -> Result<()> {
    let reason = if segment.is_empty() {
        "empty package segment"
    } else if segment.contains(['/', '\\', '\0']) {
        "path separator in package segment"
    } else {
        return Ok(());
    };

    Err(StowageError::InvalidPackage {
        package: package.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate a resource name: it must be a single file name inside the package.
pub(crate) fn check_resource(package: &str, resource: &str) -> Result<()> {
    let reason = if resource.is_empty() {
        "empty resource name"
    } else if resource == "." || resource == ".." {
        "resource must be a file name"
    } else if resource.contains(['/', '\\', '\0']) {
        "resource must be a single file name"
    } else {
        return Ok(());
    };

    Err(StowageError::InvalidResource {
        package: package.to_string(),
        resource: resource.to_string(),
        reason: reason.to_string(),
    })
}

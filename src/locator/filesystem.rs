//! Filesystem-backed package locator.

use crate::error::{Result, StowageError};
use crate::locator::package::{check_resource, PackageName};
use crate::locator::ResourceLocator;
use std::path::{Path, PathBuf};

/// Locates packages as directories under an ordered list of search roots.
///
/// A package resolves to the first search root that contains its
/// directory, the way a module resolves against an import path.
#[derive(Debug, Clone, Default)]
pub struct PackageLocator {
    search_paths: Vec<PathBuf>,
}

impl PackageLocator {
    /// Create a locator over the given search roots (in priority order).
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Create a locator whose search roots are relative to `root`.
    ///
    /// Absolute entries are kept as they are.
    pub fn rooted_at(root: &Path, search_paths: &[PathBuf]) -> Self {
        Self {
            search_paths: search_paths.iter().map(|p| root.join(p)).collect(),
        }
    }

    /// Get the search roots.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the directory backing a dotted package location.
    pub fn package_dir(&self, package: &str) -> Result<PathBuf> {
        let name = PackageName::parse(package)?;
        let relative = name.to_relative_path();

        self.search_paths
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.is_dir())
            .ok_or_else(|| StowageError::PackageNotFound {
                package: package.to_string(),
            })
    }

    /// Check whether a package can be located at all.
    pub fn has_package(&self, package: &str) -> bool {
        self.package_dir(package).is_ok()
    }
}

impl ResourceLocator for PackageLocator {
    fn resource_exists(&self, package: &str, resource: &str) -> Result<bool> {
        check_resource(package, resource)?;
        let dir = self.package_dir(package)?;
        Ok(dir.join(resource).is_file())
    }

    fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf> {
        check_resource(package, resource)?;
        let dir = self.package_dir(package)?;
        Ok(std::path::absolute(dir.join(resource))?)
    }
}

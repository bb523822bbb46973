//! Resource location for template packages.
//!
//! Providers address their templates as dotted package locations
//! (`base_app.templates`, `base_app.templates.admin`). This module maps
//! those locations onto the filesystem:
//!
//! - [`ResourceLocator`] - the existence-check and resolve-to-path seam
//! - [`PackageLocator`] - filesystem implementation over ordered search roots
//! - [`PackageName`] - validated dotted package location
//! - [`resource_exists`] - tolerant existence check that never fails
//!
//! # Example
//!
//! ```
//! use stowage::locator::{resource_exists, PackageLocator};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let pkg = temp.path().join("base_app").join("templates");
//! fs::create_dir_all(&pkg).unwrap();
//! fs::write(pkg.join("index.html"), "<h1>hi</h1>").unwrap();
//!
//! let locator = PackageLocator::new(vec![temp.path().to_path_buf()]);
//! assert!(resource_exists(&locator, "base_app.templates", "index.html"));
//!
//! // Missing packages are "not found", never an error.
//! assert!(!resource_exists(&locator, "shared_lib.templates", "index.html"));
//! ```

pub mod filesystem;
pub mod package;

pub use filesystem::PackageLocator;
pub use package::PackageName;

use crate::error::Result;
use std::path::PathBuf;

/// Existence check and path resolution for resources inside packages.
///
/// Both operations take a dotted package location and a resource name
/// relative to that package.
pub trait ResourceLocator {
    /// Check whether `resource` exists inside `package`.
    ///
    /// Errors when the package itself cannot be located or when either
    /// argument cannot be mapped onto the filesystem.
    fn resource_exists(&self, package: &str, resource: &str) -> Result<bool>;

    /// Resolve `resource` inside `package` to an absolute filesystem path.
    fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf>;
}

impl<L: ResourceLocator + ?Sized> ResourceLocator for &L {
    fn resource_exists(&self, package: &str, resource: &str) -> Result<bool> {
        (**self).resource_exists(package, resource)
    }

    fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf> {
        (**self).resource_path(package, resource)
    }
}

/// Tolerant wrapper around [`ResourceLocator::resource_exists`].
///
/// Returns `false` instead of failing when the package is missing or
/// the lookup errors for any other reason, so a broken optional
/// provider is simply skipped.
pub fn resource_exists<L: ResourceLocator + ?Sized>(
    locator: &L,
    package: &str,
    resource: &str,
) -> bool {
    match locator.resource_exists(package, resource) {
        Ok(exists) => exists,
        Err(e) => {
            tracing::debug!("Treating {}:{} as missing: {}", package, resource, e);
            false
        }
    }
}

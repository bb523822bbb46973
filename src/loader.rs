//! Template loading by logical name.
//!
//! [`TemplateLoader`] is the adapter a host (web handler, CLI) uses to
//! fetch a template: the resolver picks the file, the loader reads it.
//! Compiling or rendering the source is left to the host's template
//! engine.

use crate::error::Result;
use crate::locator::{PackageLocator, ResourceLocator};
use crate::resolver::TemplateResolver;
use std::fs;
use std::path::PathBuf;

/// A template read from its resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    /// Logical name the template was requested by.
    pub name: String,
    /// Resolved file path.
    pub path: PathBuf,
    /// Template source text.
    pub source: String,
}

/// Loads templates through a [`TemplateResolver`].
#[derive(Debug, Clone)]
pub struct TemplateLoader<L = PackageLocator> {
    resolver: TemplateResolver<L>,
}

impl<L: ResourceLocator> TemplateLoader<L> {
    /// Create a loader over a resolver.
    pub fn new(resolver: TemplateResolver<L>) -> Self {
        Self { resolver }
    }

    /// Resolved filename for a logical template name.
    pub fn filename(&self, name: &str) -> Result<PathBuf> {
        self.resolver.resolve(name)
    }

    /// Resolve and read a template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` if no provider supplies the template,
    /// or `Io` if the resolved file cannot be read.
    pub fn load(&self, name: &str) -> Result<LoadedTemplate> {
        let path = self.filename(name)?;
        let source = fs::read_to_string(&path)?;
        tracing::debug!("Loaded template '{}' from {}", name, path.display());

        Ok(LoadedTemplate {
            name: name.to_string(),
            path,
            source,
        })
    }

    /// Get the underlying resolver.
    pub fn resolver(&self) -> &TemplateResolver<L> {
        &self.resolver
    }
}

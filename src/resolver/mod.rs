//! Template resolution across ordered providers.
//!
//! Resolution order (first match wins):
//! 1. Providers in the order they were requested
//! 2. Within a provider, the target package is the provider package
//!    itself, or `<package>.<suffix>` for a dotted name
//!
//! # Example
//!
//! ```
//! use stowage::locator::PackageLocator;
//! use stowage::registry::ProviderRegistry;
//! use stowage::resolver::TemplateResolver;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! for pkg in ["base_app/templates", "client_custom/templates"] {
//!     fs::create_dir_all(temp.path().join(pkg)).unwrap();
//!     fs::write(temp.path().join(pkg).join("nav.html"), pkg).unwrap();
//! }
//!
//! let registry = ProviderRegistry::from_declarations(
//!     "templates",
//!     [("base", "base_app.templates"), ("client_custom", "client_custom.templates")],
//! );
//! let locator = PackageLocator::new(vec![temp.path().to_path_buf()]);
//! let resolver = TemplateResolver::new(&registry, &["client_custom", "base"], locator);
//!
//! let path = resolver.resolve("nav").unwrap();
//! assert!(path.to_string_lossy().contains("client_custom"));
//! ```

pub mod name;

pub use name::{TemplateName, TEMPLATE_EXTENSION};

use crate::config::StowageConfig;
use crate::error::{Result, StowageError};
use crate::locator::{resource_exists, PackageLocator, ResourceLocator};
use crate::registry::{Provider, ProviderRegistry};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One probe made while resolving a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Provider that was probed.
    pub provider: String,
    /// Target package inside that provider.
    pub package: String,
    /// Target file name.
    pub file: String,
    /// Resolved path, when the file exists.
    pub path: Option<PathBuf>,
}

impl Candidate {
    /// Whether this probe found the file.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolves logical template names against an ordered provider list.
///
/// The provider order is fixed at construction. Lookups only read the
/// filesystem, so a resolver can be shared between threads when its
/// locator can.
#[derive(Debug, Clone)]
pub struct TemplateResolver<L = PackageLocator> {
    requested: Vec<String>,
    providers: Vec<Provider>,
    locator: L,
}

impl<L: ResourceLocator> TemplateResolver<L> {
    /// Create a resolver for the named providers, in priority order.
    ///
    /// Names the registry does not know are dropped from the lookup but
    /// kept for error reporting.
    pub fn new<S: AsRef<str>>(registry: &ProviderRegistry, names: &[S], locator: L) -> Self {
        let requested = names.iter().map(|n| n.as_ref().to_string()).collect();
        let providers = registry.named(names);
        Self::from_providers(requested, providers, locator)
    }

    /// Create a resolver from already-resolved provider handles.
    pub fn from_providers(requested: Vec<String>, providers: Vec<Provider>, locator: L) -> Self {
        tracing::debug!(
            "Template resolver using providers [{}]",
            providers
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            requested,
            providers,
            locator,
        }
    }

    /// Resolve a template name to the path of the first matching file.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` when no provider supplies the file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let target = TemplateName::parse(name);
        let file = target.file_name();

        for provider in &self.providers {
            let package = match provider.target_package(target.suffix()) {
                Ok(package) => package,
                Err(e) => {
                    tracing::debug!("Skipping provider '{}': {}", provider.name, e);
                    continue;
                }
            };

            if resource_exists(&self.locator, package.as_str(), &file) {
                tracing::debug!(
                    "Resolved template '{}' from provider '{}' ({})",
                    name,
                    provider.name,
                    package
                );
                return self.locator.resource_path(package.as_str(), &file);
            }
        }

        Err(StowageError::TemplateNotFound {
            name: name.to_string(),
            providers: self.requested.clone(),
        })
    }

    /// Probe every provider for a template name, without stopping at the
    /// first hit. The first found candidate is the one `resolve` returns.
    pub fn candidates(&self, name: &str) -> Vec<Candidate> {
        let target = TemplateName::parse(name);
        let file = target.file_name();

        self.providers
            .iter()
            .map(|provider| {
                let (package, path) = match provider.target_package(target.suffix()) {
                    Ok(package) => {
                        let path = if resource_exists(&self.locator, package.as_str(), &file) {
                            self.locator.resource_path(package.as_str(), &file).ok()
                        } else {
                            None
                        };
                        (package.to_string(), path)
                    }
                    Err(StowageError::InvalidPackage { package, .. }) => (package, None),
                    Err(_) => (provider.package.to_string(), None),
                };

                Candidate {
                    provider: provider.name.clone(),
                    package,
                    file: file.clone(),
                    path,
                }
            })
            .collect()
    }

    /// Check if a template name resolves.
    pub fn has(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Provider identifiers as requested (including unresolved ones).
    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    /// Providers actually used for lookups, in priority order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Get the resource locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }
}

impl TemplateResolver<PackageLocator> {
    /// Create a filesystem resolver from project configuration.
    ///
    /// Search roots are taken relative to `project_root`.
    pub fn from_config(config: &StowageConfig, project_root: &Path) -> Self {
        let registry = ProviderRegistry::from_config(config, &config.namespace);
        let order = config.lookup_order(&registry);
        let locator = PackageLocator::rooted_at(project_root, &config.search_paths);
        Self::new(&registry, &order, locator)
    }
}

//! Provider discovery from declarations.
//!
//! Providers are declared per namespace as `name -> package location`
//! pairs. The registry hands out ordered provider lists for a requested
//! list of names ("name order"), dropping names it cannot resolve.

use crate::config::StowageConfig;
use crate::error::Result;
use crate::locator::PackageName;
use crate::registry::provider::Provider;
use std::collections::BTreeMap;

/// Registry of the providers declared in one namespace.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    namespace: String,
    providers: BTreeMap<String, Provider>,
}

impl ProviderRegistry {
    /// Create an empty registry for a namespace.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            providers: BTreeMap::new(),
        }
    }

    /// Build a registry from `(name, package)` declarations.
    ///
    /// Declarations with a malformed package location are skipped.
    pub fn from_declarations<I, N, P>(namespace: &str, declarations: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: AsRef<str>,
    {
        let mut registry = Self::new(namespace);
        for (name, package) in declarations {
            if let Err(e) = registry.register(name.as_ref(), package.as_ref()) {
                tracing::warn!(
                    "Skipping provider '{}' in namespace '{}': {}",
                    name.as_ref(),
                    namespace,
                    e
                );
            }
        }
        registry
    }

    /// Build a registry from the `providers` table of a configuration.
    ///
    /// A namespace with no declarations yields an empty registry.
    pub fn from_config(config: &StowageConfig, namespace: &str) -> Self {
        match config.providers.get(namespace) {
            Some(declared) => Self::from_declarations(namespace, declared),
            None => {
                tracing::debug!("No providers declared in namespace '{}'", namespace);
                Self::new(namespace)
            }
        }
    }

    /// Declare a provider. A later declaration of the same name replaces
    /// the earlier one.
    pub fn register(&mut self, name: &str, package: &str) -> Result<()> {
        let package = PackageName::parse(package)?;
        self.providers.insert(
            name.to_string(),
            Provider::new(name, self.namespace.as_str(), package),
        );
        Ok(())
    }

    /// Namespace this registry covers.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get a provider by name.
    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    /// Check if a provider is declared.
    pub fn has(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// All declared providers, sorted by name.
    pub fn providers(&self) -> Vec<&Provider> {
        self.providers.values().collect()
    }

    /// All declared provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(|s| s.as_str()).collect()
    }

    /// Number of declared providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if no providers are declared.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Providers for `names`, in the order the names are given.
    ///
    /// Unknown names are left out. A name listed twice keeps its first
    /// position.
    pub fn named<S: AsRef<str>>(&self, names: &[S]) -> Vec<Provider> {
        let mut ordered: Vec<Provider> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            if ordered.iter().any(|p| p.name == name) {
                continue;
            }

            match self.providers.get(name) {
                Some(provider) => ordered.push(provider.clone()),
                None => tracing::warn!(
                    "Provider '{}' is not declared in namespace '{}'; skipping",
                    name,
                    self.namespace
                ),
            }
        }

        ordered
    }
}

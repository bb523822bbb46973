//! Configuration schema types.
//!
//! ```yaml
//! namespace: templates
//! search_paths: [".", "vendor"]
//! order: [client_custom, shared, base]
//! providers:
//!   templates:
//!     base: base_app.templates
//!     shared: shared_lib.templates
//!     client_custom: client_custom.templates
//! settings:
//!   default_output: normal
//! ```

use crate::registry::ProviderRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure for `.stowage/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StowageConfig {
    /// Namespace whose providers are used for lookups.
    pub namespace: String,

    /// Roots that dotted package locations resolve against, in priority
    /// order. Relative entries are relative to the project root.
    pub search_paths: Vec<PathBuf>,

    /// Provider lookup order (highest priority first).
    ///
    /// Empty means every provider of the namespace, sorted by name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<String>,

    /// Provider declarations: namespace -> provider name -> package location.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub providers: BTreeMap<String, BTreeMap<String, String>>,

    /// Output settings.
    pub settings: Settings,
}

impl Default for StowageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            search_paths: default_search_paths(),
            order: Vec::new(),
            providers: BTreeMap::new(),
            settings: Settings::default(),
        }
    }
}

impl StowageConfig {
    /// The effective provider lookup order for a registry.
    pub fn lookup_order(&self, registry: &ProviderRegistry) -> Vec<String> {
        if self.order.is_empty() {
            registry.names().into_iter().map(str::to_string).collect()
        } else {
            self.order.clone()
        }
    }

    /// Provider declarations for the configured namespace.
    pub fn declared(&self) -> Option<&BTreeMap<String, String>> {
        self.providers.get(&self.namespace)
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn default_namespace() -> String {
    "templates".to_string()
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

//! Template provider registry for Stowage.
//!
//! Providers are declared in configuration, grouped by namespace:
//!
//! ```yaml
//! providers:
//!   templates:
//!     base: base_app.templates
//!     client_custom: client_custom.templates
//! ```
//!
//! The registry resolves a requested list of provider names into
//! provider handles, keeping the requested order. That order is the
//! override priority the resolver uses (first match wins).
//!
//! # Example
//!
//! ```
//! use stowage::registry::ProviderRegistry;
//!
//! let registry = ProviderRegistry::from_declarations(
//!     "templates",
//!     [("base", "base_app.templates"), ("client_custom", "client_custom.templates")],
//! );
//!
//! let ordered = registry.named(&["client_custom", "unknown", "base"]);
//! assert_eq!(ordered.len(), 2);
//! assert_eq!(ordered[0].name, "client_custom");
//! ```

pub mod discovery;
pub mod provider;

// Re-exports
pub use discovery::ProviderRegistry;
pub use provider::Provider;

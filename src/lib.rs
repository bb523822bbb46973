//! Stowage - layered template resolution across ordered providers.
//!
//! Independently packaged template providers register under a shared
//! namespace. A resolver is built with a preferred provider order and
//! maps a dotted template name to the file of the first provider that
//! has it, so later providers act as fallbacks and earlier ones override.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`loader`] - Template loading on top of the resolver
//! - [`locator`] - Package resource lookup on disk
//! - [`registry`] - Provider declarations per namespace
//! - [`resolver`] - Ordered first-match template resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::fs;
//! use stowage::locator::PackageLocator;
//! use stowage::registry::ProviderRegistry;
//! use stowage::resolver::TemplateResolver;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let base = temp.path().join("base_app").join("templates");
//! fs::create_dir_all(&base).unwrap();
//! fs::write(base.join("index.html"), "<h1>Hello</h1>").unwrap();
//!
//! let registry = ProviderRegistry::from_declarations(
//!     "templates",
//!     [("base", "base_app.templates"), ("shared", "shared_lib.templates")],
//! );
//! let locator = PackageLocator::new(vec![temp.path().to_path_buf()]);
//! let resolver = TemplateResolver::new(&registry, &["shared", "base"], locator);
//!
//! let path = resolver.resolve("index").unwrap();
//! assert!(path.ends_with("base_app/templates/index.html"));
//! assert!(resolver.resolve("about").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod locator;
pub mod registry;
pub mod resolver;
pub mod ui;

pub use error::{Result, StowageError};

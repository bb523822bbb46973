//! Configuration loading, parsing, and validation for Stowage.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use stowage::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".stowage");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(
//!     config_dir.join("config.yml"),
//!     "providers:\n  templates:\n    base: base_app.templates\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.namespace, "templates");
//! ```
//!
//! # Configuration File Locations
//!
//! Stowage merges configuration in this order:
//! 1. Project config (`.stowage/config.yml`)
//! 2. Local overrides (`.stowage/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{OutputMode, Settings, StowageConfig};

// Loader re-exports
pub use loader::{
    find_project_root, load_config, load_config_file, load_merged_config, parse_config,
    project_config_path, ConfigPaths, CONFIG_DIR,
};

// Merger re-exports
pub use merger::{merge_into, merge_layers};

// Validator re-exports
pub use validator::{validate, validate_config, Severity, ValidationError};

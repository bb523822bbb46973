//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! the project directory in the correct priority order.

use crate::config::merger::merge_layers;
use crate::config::schema::StowageConfig;
use crate::error::{Result, StowageError};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding Stowage configuration inside a project.
pub const CONFIG_DIR: &str = ".stowage";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.stowage/config.yml`)
/// 2. Local overrides (`.stowage/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .stowage/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .stowage/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_config_path(project_root)),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

/// Expected location of the project config.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join("config.yml")
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.stowage` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() || current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value.
fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StowageError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StowageError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| StowageError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn config_from_value(value: Value, source_path: &Path) -> Result<StowageConfig> {
    if value.is_null() {
        return Ok(StowageConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| StowageError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a config. Empty content yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<StowageConfig> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| StowageError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    config_from_value(value, source_path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StowageConfig> {
    let value = load_config_value(path)?;
    config_from_value(value, path)
}

/// Load and merge the project config with its local overrides.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<StowageConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_project_config() {
        return Err(StowageError::ConfigNotFound {
            path: project_config_path(project_root),
        });
    }

    let layers = paths
        .all_existing()
        .into_iter()
        .map(|path| {
            tracing::debug!("Loading config layer {}", path.display());
            load_config_value(path)
        })
        .collect::<Result<Vec<_>>>()?;

    config_from_value(merge_layers(layers), &project_config_path(project_root))
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<StowageConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

//! Project context shared by commands.
//!
//! Loads the project configuration, applies command-line overrides and
//! builds the resolver the commands work with.

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::{load_config, validate, StowageConfig, ValidationError};
use crate::error::Result;
use crate::locator::PackageLocator;
use crate::registry::ProviderRegistry;
use crate::resolver::TemplateResolver;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::CommandResult;

/// Command-line settings that take precedence over the config files.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Load exactly this config file instead of discovering and merging.
    pub config: Option<PathBuf>,
    /// Provider lookup order.
    pub order: Vec<String>,
    /// Provider namespace.
    pub namespace: Option<String>,
}

impl ConfigOverrides {
    /// Collect overrides from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            order: cli.order.clone(),
            namespace: cli.namespace.clone(),
        }
    }

    /// Apply the overrides to a loaded configuration.
    pub fn apply(&self, config: &mut StowageConfig) {
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if !self.order.is_empty() {
            config.order = self.order.clone();
        }
    }
}

/// Loaded project configuration with overrides applied.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_root: PathBuf,
    config: StowageConfig,
    warnings: Vec<ValidationError>,
}

impl ProjectContext {
    /// Load and validate the configuration for a project.
    pub fn load(project_root: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = load_config(project_root, overrides.config.as_deref())?;
        overrides.apply(&mut config);
        let warnings = validate(&config)?;

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config,
            warnings,
        })
    }

    /// Get the effective configuration.
    pub fn config(&self) -> &StowageConfig {
        &self.config
    }

    /// Registry for the configured namespace.
    pub fn registry(&self) -> ProviderRegistry {
        ProviderRegistry::from_config(&self.config, &self.config.namespace)
    }

    /// Filesystem locator over the configured search roots.
    pub fn locator(&self) -> PackageLocator {
        PackageLocator::rooted_at(&self.project_root, &self.config.search_paths)
    }

    /// Resolver over the configured lookup order.
    pub fn resolver(&self) -> TemplateResolver {
        TemplateResolver::from_config(&self.config, &self.project_root)
    }

    /// Report warnings and apply the configured output mode.
    ///
    /// The configured default only applies when no CLI flag changed the mode.
    pub fn prepare_ui(&self, ui: &mut dyn UserInterface) {
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(self.config.settings.default_output.into());
        }

        for warning in &self.warnings {
            ui.warning(&warning.message);
        }
    }
}

/// Report a missing configuration and produce the matching result.
pub fn report_missing_config(ui: &mut dyn UserInterface, path: &Path) -> CommandResult {
    ui.error(&format!("No configuration found at {}", path.display()));
    ui.hint("Create .stowage/config.yml declaring your template providers.");
    CommandResult::failure(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StowageError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".stowage");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.yml"), config).unwrap();
        temp
    }

    const CONFIG: &str = r#"
order: [client_custom, shared, base]
providers:
  templates:
    base: base_app.templates
    shared: shared_lib.templates
    client_custom: client_custom.templates
settings:
  default_output: verbose
"#;

    #[test]
    fn overrides_replace_order_and_namespace() {
        let temp = setup_project(CONFIG);
        let overrides = ConfigOverrides {
            order: vec!["base".to_string()],
            namespace: Some("templates".to_string()),
            ..Default::default()
        };

        let ctx = ProjectContext::load(temp.path(), &overrides).unwrap();
        assert_eq!(ctx.config().order, vec!["base"]);
        assert_eq!(ctx.resolver().providers().len(), 1);
    }

    #[test]
    fn empty_order_override_keeps_config_order() {
        let temp = setup_project(CONFIG);
        let ctx = ProjectContext::load(temp.path(), &ConfigOverrides::default()).unwrap();
        assert_eq!(ctx.config().order.len(), 3);
        assert_eq!(ctx.registry().len(), 3);
    }

    #[test]
    fn missing_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let result = ProjectContext::load(temp.path(), &ConfigOverrides::default());
        assert!(matches!(result, Err(StowageError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_config_fails_validation() {
        let temp = setup_project("namespace: ''\n");
        let result = ProjectContext::load(temp.path(), &ConfigOverrides::default());
        assert!(matches!(
            result,
            Err(StowageError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn prepare_ui_applies_default_output_and_warnings() {
        let temp = setup_project(CONFIG);
        let overrides = ConfigOverrides {
            order: vec!["ghost".to_string(), "base".to_string()],
            ..Default::default()
        };
        let ctx = ProjectContext::load(temp.path(), &overrides).unwrap();

        let mut ui = MockUI::new();
        ctx.prepare_ui(&mut ui);

        assert_eq!(ui.output_mode(), OutputMode::Verbose);
        assert!(ui.has_warning("ghost"));
    }

    #[test]
    fn prepare_ui_respects_explicit_mode() {
        let temp = setup_project(CONFIG);
        let ctx = ProjectContext::load(temp.path(), &ConfigOverrides::default()).unwrap();

        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ctx.prepare_ui(&mut ui);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn report_missing_config_exits_with_two() {
        let mut ui = MockUI::new();
        let result = report_missing_config(&mut ui, Path::new("/x/.stowage/config.yml"));
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No configuration found"));
    }
}

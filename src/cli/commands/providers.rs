//! Providers command implementation.
//!
//! The `stowage providers` command enumerates the providers declared in
//! the namespace, with their package locations, lookup priority and
//! whether their package can currently be located.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ProvidersArgs;
use crate::error::{Result, StowageError};
use crate::ui::{StowageTheme, UserInterface};

use super::context::{report_missing_config, ConfigOverrides, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// One row of the provider listing.
#[derive(Debug, Clone, Serialize)]
struct ProviderEntry {
    name: String,
    namespace: String,
    package: String,
    /// Position in the lookup order (0 is highest priority).
    priority: Option<usize>,
    installed: bool,
}

/// The providers command implementation.
pub struct ProvidersCommand {
    project_root: PathBuf,
    overrides: ConfigOverrides,
    args: ProvidersArgs,
}

impl ProvidersCommand {
    /// Create a new providers command.
    pub fn new(project_root: &Path, overrides: ConfigOverrides, args: ProvidersArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            overrides,
            args,
        }
    }

    fn entries(ctx: &ProjectContext) -> Vec<ProviderEntry> {
        let registry = ctx.registry();
        let locator = ctx.locator();
        let resolver = ctx.resolver();

        registry
            .providers()
            .into_iter()
            .map(|provider| ProviderEntry {
                name: provider.name.clone(),
                namespace: provider.namespace.clone(),
                package: provider.package.to_string(),
                priority: resolver
                    .providers()
                    .iter()
                    .position(|p| p.name == provider.name),
                installed: locator.has_package(provider.package.as_str()),
            })
            .collect()
    }
}

impl Command for ProvidersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::load(&self.project_root, &self.overrides) {
            Ok(ctx) => ctx,
            Err(StowageError::ConfigNotFound { path }) => {
                return Ok(report_missing_config(ui, &path));
            }
            Err(e) => return Err(e),
        };
        ctx.prepare_ui(ui);

        let entries = Self::entries(&ctx);
        let namespace = ctx.config().namespace.clone();

        if self.args.json {
            let rendered = serde_json::to_string_pretty(&entries)
                .map_err(|e| StowageError::Other(e.into()))?;
            ui.message(&rendered);
            return Ok(CommandResult::success());
        }

        let theme = StowageTheme::detect();
        ui.message(&format!(
            "{}",
            theme
                .key
                .apply_to(format!("Providers in namespace \"{}\":", namespace))
        ));

        if entries.is_empty() {
            ui.message(&format!("  {}", theme.dim.apply_to("(none declared)")));
            return Ok(CommandResult::success());
        }

        for entry in &entries {
            let mut line = format!(
                "  {} {}",
                theme.highlight.apply_to(&entry.name),
                theme.dim.apply_to(format!("(package {})", entry.package))
            );
            if let Some(priority) = entry.priority {
                line.push_str(&format!(" {}", theme.dim.apply_to(format!("#{}", priority + 1))));
            }
            if !entry.installed {
                line.push_str(&format!(" {}", theme.warning.apply_to("[not installed]")));
            }
            ui.message(&line);
        }

        let resolver = ctx.resolver();
        let order: Vec<&str> = resolver.providers().iter().map(|p| p.name.as_str()).collect();
        ui.hint(&format!("Lookup order: {}", order.join(" → ")));

        Ok(CommandResult::success())
    }
}

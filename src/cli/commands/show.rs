//! Show command implementation.
//!
//! The `stowage show` command prints the source of the template a name
//! resolves to.

use std::path::{Path, PathBuf};

use crate::cli::args::ShowArgs;
use crate::error::{Result, StowageError};
use crate::loader::TemplateLoader;
use crate::ui::UserInterface;

use super::context::{report_missing_config, ConfigOverrides, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    project_root: PathBuf,
    overrides: ConfigOverrides,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(project_root: &Path, overrides: ConfigOverrides, args: ShowArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            overrides,
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::load(&self.project_root, &self.overrides) {
            Ok(ctx) => ctx,
            Err(StowageError::ConfigNotFound { path }) => {
                return Ok(report_missing_config(ui, &path));
            }
            Err(e) => return Err(e),
        };
        ctx.prepare_ui(ui);

        let loader = TemplateLoader::new(ctx.resolver());
        match loader.load(&self.args.name) {
            Ok(template) => {
                if ui.output_mode().shows_details() {
                    ui.hint(&template.path.display().to_string());
                }
                ui.message(template.source.trim_end_matches('\n'));
                Ok(CommandResult::success())
            }
            Err(e @ StowageError::TemplateNotFound { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

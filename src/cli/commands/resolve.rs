//! Resolve command implementation.
//!
//! The `stowage resolve` command prints the path a template name
//! resolves to, optionally with every provider that was probed.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ResolveArgs;
use crate::error::{Result, StowageError};
use crate::resolver::Candidate;
use crate::ui::{StowageTheme, UserInterface};

use super::context::{report_missing_config, ConfigOverrides, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// JSON document printed by `resolve --json`.
#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    name: &'a str,
    path: Option<PathBuf>,
    provider: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<&'a [Candidate]>,
}

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    overrides: ConfigOverrides,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, overrides: ConfigOverrides, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            overrides,
            args,
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::load(&self.project_root, &self.overrides) {
            Ok(ctx) => ctx,
            Err(StowageError::ConfigNotFound { path }) => {
                return Ok(report_missing_config(ui, &path));
            }
            Err(e) => return Err(e),
        };
        ctx.prepare_ui(ui);

        let resolver = ctx.resolver();
        let name = self.args.name.as_str();
        let explain = self.args.explain || ui.output_mode().shows_details();
        let candidates = resolver.candidates(name);

        if self.args.json {
            let resolved = match resolver.resolve(name) {
                Ok(path) => Some(path),
                Err(StowageError::TemplateNotFound { .. }) => None,
                Err(e) => return Err(e),
            };
            let report = ResolveReport {
                name,
                provider: resolved
                    .as_ref()
                    .and_then(|_| candidates.iter().find(|c| c.found()))
                    .map(|c| c.provider.as_str()),
                path: resolved.clone(),
                candidates: explain.then_some(candidates.as_slice()),
            };
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| StowageError::Other(e.into()))?;
            ui.message(&rendered);

            return Ok(if resolved.is_some() {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        if explain {
            let theme = StowageTheme::detect();
            for candidate in &candidates {
                ui.message(&theme.format_probe(
                    &candidate.provider,
                    &candidate.package,
                    candidate.found(),
                ));
            }
        }

        match resolver.resolve(name) {
            Ok(path) => {
                ui.message(&path.display().to_string());
                Ok(CommandResult::success())
            }
            Err(e @ StowageError::TemplateNotFound { .. }) => {
                ui.error(&e.to_string());
                if !explain {
                    ui.hint(&format!(
                        "Run 'stowage resolve {} --explain' to see every provider probed.",
                        name
                    ));
                }
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
order: [client_custom, shared, base]
providers:
  templates:
    base: base_app.templates
    shared: shared_lib.templates
    client_custom: client_custom.templates
"#;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".stowage/config.yml", CONFIG);
        write(temp.path(), "base_app/templates/index.html", "<h1>index</h1>");
        write(temp.path(), "base_app/templates/nav.html", "<nav>base</nav>");
        write(temp.path(), "base_app/templates/admin/index.html", "<h1>admin</h1>");
        write(temp.path(), "client_custom/templates/nav.html", "<nav>custom</nav>");
        temp
    }

    fn run(temp: &TempDir, args: ResolveArgs, ui: &mut MockUI) -> CommandResult {
        ResolveCommand::new(temp.path(), ConfigOverrides::default(), args)
            .execute(ui)
            .unwrap()
    }

    fn args(name: &str) -> ResolveArgs {
        ResolveArgs {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_prints_override_path() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        let result = run(&temp, args("nav"), &mut ui);

        assert!(result.success);
        assert_eq!(ui.messages().len(), 1);
        assert!(ui.messages()[0].contains("client_custom"));
        assert!(ui.messages()[0].ends_with("nav.html"));
    }

    #[test]
    fn resolve_subpackage_template() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        let result = run(&temp, args("admin.index"), &mut ui);

        assert!(result.success);
        assert!(ui.has_message("admin"));
    }

    #[test]
    fn resolve_missing_template_fails() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        let result = run(&temp, args("admin.missing"), &mut ui);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("admin.missing"));
        assert!(ui.has_error("client_custom, shared, base"));
        assert!(ui.has_hint("--explain"));
    }

    #[test]
    fn resolve_explain_lists_probes() {
        let temp = setup_project();
        let mut ui = MockUI::new();
        let explain = ResolveArgs {
            explain: true,
            ..args("nav")
        };

        let result = run(&temp, explain, &mut ui);

        assert!(result.success);
        assert_eq!(ui.messages().len(), 4);
        assert!(ui.messages()[0].contains("client_custom"));
        assert!(ui.messages()[1].contains("shared_lib.templates"));
        assert!(ui.messages()[2].contains("base_app.templates"));
    }

    #[test]
    fn verbose_mode_implies_explain() {
        let temp = setup_project();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run(&temp, args("index"), &mut ui);

        assert_eq!(ui.messages().len(), 4);
    }

    #[test]
    fn resolve_json_output() {
        let temp = setup_project();
        let mut ui = MockUI::new();
        let json_args = ResolveArgs {
            json: true,
            ..args("nav")
        };

        let result = run(&temp, json_args, &mut ui);

        assert!(result.success);
        let doc: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(doc["name"], "nav");
        assert_eq!(doc["provider"], "client_custom");
        assert!(doc["path"].as_str().unwrap().ends_with("nav.html"));
        assert!(doc.get("candidates").is_none());
    }

    #[test]
    fn resolve_json_missing_template() {
        let temp = setup_project();
        let mut ui = MockUI::new();
        let json_args = ResolveArgs {
            json: true,
            explain: true,
            ..args("missing")
        };

        let result = run(&temp, json_args, &mut ui);

        assert_eq!(result.exit_code, 1);
        let doc: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(doc["path"].is_null());
        assert_eq!(doc["candidates"].as_array().unwrap().len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn resolve_json_with_non_utf8_path_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join(OsStr::from_bytes(b"site-\xff"));
        if fs::create_dir_all(&root).is_err() {
            // Filesystem refuses non-UTF-8 names.
            return;
        }
        write(&root, ".stowage/config.yml", CONFIG);
        write(&root, "base_app/templates/index.html", "<h1>index</h1>");

        let json_args = ResolveArgs {
            json: true,
            ..args("index")
        };
        let mut ui = MockUI::new();
        let result = ResolveCommand::new(&root, ConfigOverrides::default(), json_args).execute(&mut ui);

        assert!(result.is_err());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn resolve_without_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, args("index"), &mut ui);

        assert_eq!(result.exit_code, 2);
    }
}

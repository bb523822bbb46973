//! Stowage CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stowage::cli::{Cli, CommandDispatcher, ConfigOverrides};
use stowage::config::find_project_root;
use stowage::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `--debug` forces DEBUG for this crate; otherwise `RUST_LOG` applies,
/// falling back to INFO.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stowage=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stowage=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Stowage starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_default();
            find_project_root(&cwd).unwrap_or(cwd)
        }
    };
    tracing::debug!("Project root: {}", project_root.display());

    let mut ui = create_ui(output_mode);
    let dispatcher = CommandDispatcher::new(project_root, ConfigOverrides::from_cli(&cli));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Stowage - Resolve templates across ordered template providers.
#[derive(Debug, Parser)]
#[command(name = "stowage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .stowage/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Provider lookup order, highest priority first (comma-separated)
    #[arg(
        short,
        long,
        global = true,
        env = "STOWAGE_ORDER",
        value_delimiter = ','
    )]
    pub order: Vec<String>,

    /// Provider namespace to use (overrides the configured namespace)
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the path a template name resolves to
    Resolve(ResolveArgs),

    /// Print the source of the template a name resolves to
    Show(ShowArgs),

    /// List the providers declared in the namespace
    Providers(ProvidersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Logical template name (e.g., `index`, `admin.index`)
    pub name: String,

    /// Show every provider probed, not only the winner
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Logical template name (e.g., `index`, `admin.index`)
    pub name: String,
}

/// Arguments for the `providers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProvidersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resolve_with_flags() {
        let cli = Cli::parse_from(["stowage", "resolve", "admin.index", "--explain"]);
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.name, "admin.index");
                assert!(args.explain);
                assert!(!args.json);
            }
            other => panic!("Expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn parses_comma_separated_order() {
        let cli = Cli::parse_from([
            "stowage",
            "--order",
            "client_custom,shared,base",
            "resolve",
            "nav",
        ]);
        assert_eq!(cli.order, vec!["client_custom", "shared", "base"]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["stowage", "providers", "--namespace", "sweet_app.templates", "-q"]);
        assert_eq!(cli.namespace.as_deref(), Some("sweet_app.templates"));
        assert!(cli.quiet);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["stowage"]).is_err());
    }
}

//! Command-line interface for Stowage.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ProvidersArgs, ResolveArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ConfigOverrides};

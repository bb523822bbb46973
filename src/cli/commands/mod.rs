//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands that
//! need the project configuration load it through [`ProjectContext`].

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod providers;
pub mod resolve;
pub mod show;

pub use context::{ConfigOverrides, ProjectContext};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};

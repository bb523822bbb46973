//! Shell completions generation.
//!
//! The `stowage completions` command writes a completion script for the
//! requested shell to stdout.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const BIN_NAME: &str = "stowage";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script into `out`.
    pub fn render(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.render(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

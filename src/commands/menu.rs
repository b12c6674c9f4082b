//! Menu command - the interactive five-option loop.

use anyhow::{Context, Result};
use clap::Args;

use caesar_cipher::{menu, CipherConfig};

use super::CommandExecutor;

/// Run the interactive menu on stdin/stdout.
#[derive(Args, Debug, Default)]
pub struct MenuCommand {}

impl CommandExecutor for MenuCommand {
    fn execute(&self, config: &CipherConfig) -> Result<()> {
        menu::run_interactive(config.solver(), config.analyzer()?)
            .context("Interactive menu I/O failed")
    }
}

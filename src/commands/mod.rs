//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod brute_force;
mod decrypt;
mod encrypt;
mod frequency;
mod menu;

pub use brute_force::BruteForceCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use frequency::FrequencyCommand;
pub use menu::MenuCommand;

use anyhow::Result;

use caesar_cipher::CipherConfig;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments and the loaded config.
    fn execute(&self, config: &CipherConfig) -> Result<()>;
}

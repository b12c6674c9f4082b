//! Encrypt command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use caesar_cipher::{files, CipherConfig};

use super::CommandExecutor;

/// Encrypt a file with a Caesar shift.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    /// Path to the plaintext file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to write the ciphertext to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Shift (key); may be negative
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: i64,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self, _config: &CipherConfig) -> Result<()> {
        files::encrypt_file(&self.input, &self.output, self.shift)
            .with_context(|| format!("Failed to encrypt {}", self.input.display()))?;

        println!("Encrypted with shift {} -> {}", self.shift, self.output.display());
        Ok(())
    }
}

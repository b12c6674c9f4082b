//! Decrypt command (known shift).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use caesar_cipher::{files, CipherConfig};

use super::CommandExecutor;

/// Decrypt a file with a known Caesar shift.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    /// Path to the ciphertext file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to write the plaintext to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Shift (key) used for encryption; may be negative
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: i64,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self, _config: &CipherConfig) -> Result<()> {
        files::decrypt_file(&self.input, &self.output, self.shift)
            .with_context(|| format!("Failed to decrypt {}", self.input.display()))?;

        println!("Decrypted with shift {} -> {}", self.shift, self.output.display());
        Ok(())
    }
}

//! Brute-force command - recover the shift from a known plaintext sample.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use caesar_cipher::{files, CaesarError, CipherConfig};

use super::CommandExecutor;

/// Try every shift and keep the first whose output contains the sample.
///
/// The sample is a file holding a fragment of the expected plaintext; only
/// its first `probe_len` characters (100 by default) are searched for.
#[derive(Args, Debug)]
pub struct BruteForceCommand {
    /// Path to the ciphertext file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to a file with known plaintext
    #[arg(short = 'e', long)]
    pub sample: Option<PathBuf>,

    /// Path to write the plaintext to (only on success)
    #[arg(short, long)]
    pub output: PathBuf,
}

impl CommandExecutor for BruteForceCommand {
    fn execute(&self, config: &CipherConfig) -> Result<()> {
        let solver = config.solver();

        match files::brute_force_file(&solver, &self.input, self.sample.as_deref(), &self.output) {
            Ok(found) => {
                println!("Successfully decrypted with shift: {}", found.shift);
                println!("Plaintext written to {}", self.output.display());
                Ok(())
            }
            // Not finding a shift is an outcome, not a failure.
            Err(CaesarError::BruteForce(e)) => {
                println!("{e}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

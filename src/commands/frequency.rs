//! Frequency command - estimate the shift from letter frequencies.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use caesar_cipher::{decrypt, files, CipherConfig};

use super::CommandExecutor;

/// Estimate the shift by assuming the most frequent letter is `о`.
///
/// Works only on reasonably long Russian texts. Prints the estimate; with
/// --output it also writes the text decrypted with that estimate.
#[derive(Args, Debug)]
pub struct FrequencyCommand {
    /// Path to the ciphertext file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also decrypt with the estimated shift and write the result here
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for FrequencyCommand {
    fn execute(&self, config: &CipherConfig) -> Result<()> {
        let analyzer = config.analyzer()?;
        let ciphertext = files::read_text(&self.input)?;
        let estimate = analyzer
            .estimate(&ciphertext)
            .with_context(|| format!("Cannot estimate shift of {}", self.input.display()))?;

        println!("Estimated shift: {}", estimate.shift);
        println!(
            "Most frequent letter: '{}' ({} occurrences)",
            estimate.letter, estimate.occurrences
        );

        if let Some(output) = &self.output {
            files::write_text(output, &decrypt(&ciphertext, estimate.shift))?;
            println!("Plaintext written to {}", output.display());
        }

        Ok(())
    }
}

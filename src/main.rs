//! Caesar - shift cipher over Cyrillic and Latin text
//!
//! Encrypts and decrypts files, and recovers unknown shifts by brute force
//! or frequency analysis. Without a subcommand it starts the interactive menu.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use caesar_cipher::CipherConfig;

mod commands;

use commands::{
    BruteForceCommand, CommandExecutor, DecryptCommand, EncryptCommand, FrequencyCommand,
    MenuCommand,
};

/// Caesar cipher for Russian and English text
///
/// Letters shift within their own alphabet (Russian upper/lower: 33 letters,
/// English upper/lower: 26 letters); everything else is left as is.
#[derive(Parser)]
#[command(name = "caesar")]
#[command(version)]
#[command(about = "Caesar cipher with brute-force and frequency-analysis shift recovery")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a config file (default: ~/.caesar/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file with a known shift
    Encrypt(EncryptCommand),

    /// Decrypt a file with a known shift
    Decrypt(DecryptCommand),

    /// Find the shift using a known plaintext sample
    #[command(name = "brute-force")]
    BruteForce(BruteForceCommand),

    /// Estimate the shift from letter frequencies
    Frequency(FrequencyCommand),

    /// Interactive menu (default when no command is given)
    Menu(MenuCommand),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<CipherConfig> {
    match path {
        Some(path) => CipherConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => CipherConfig::load().context("Failed to load config"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Menu(MenuCommand::default()));

    match command {
        Commands::Encrypt(cmd) => cmd.execute(&config),
        Commands::Decrypt(cmd) => cmd.execute(&config),
        Commands::BruteForce(cmd) => cmd.execute(&config),
        Commands::Frequency(cmd) => cmd.execute(&config),
        Commands::Menu(cmd) => cmd.execute(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["caesar"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_negative_shift_accepted() {
        let cli =
            Cli::try_parse_from(["caesar", "encrypt", "-i", "a.txt", "-o", "b.txt", "-s", "-5"])
                .unwrap();
        match cli.command {
            Some(Commands::Encrypt(cmd)) => assert_eq!(cmd.shift, -5),
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn test_invalid_shift_rejected() {
        assert!(
            Cli::try_parse_from(["caesar", "decrypt", "-i", "a", "-o", "b", "-s", "abc"]).is_err()
        );
    }

    #[test]
    fn test_brute_force_sample_optional() {
        let cli = Cli::try_parse_from(["caesar", "brute-force", "-i", "c.txt", "-o", "p.txt"])
            .unwrap();
        match cli.command {
            Some(Commands::BruteForce(cmd)) => assert!(cmd.sample.is_none()),
            _ => panic!("expected brute-force"),
        }
    }
}

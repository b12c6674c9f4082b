//! Interactive line-oriented menu.
//!
//! Prompts for a mode, then for the paths and shift that mode needs. An
//! error in one operation is printed and the loop goes on; only choice 5
//! or end of input stops it.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::analysis::{BruteForceSolver, FrequencyAnalyzer};
use crate::error::{parse_shift, CaesarError};
use crate::files;

/// The five menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Encrypt,
    Decrypt,
    BruteForce,
    Frequency,
    Exit,
}

impl MenuChoice {
    /// Parses a menu line (`"1"`..`"5"`).
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Encrypt),
            "2" => Some(Self::Decrypt),
            "3" => Some(Self::BruteForce),
            "4" => Some(Self::Frequency),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu state: the configured analyzers plus the I/O streams.
pub struct Menu<R, W> {
    input: R,
    output: W,
    solver: BruteForceSolver,
    analyzer: FrequencyAnalyzer,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu reading from `input` and printing to `output`.
    pub fn new(input: R, output: W, solver: BruteForceSolver, analyzer: FrequencyAnalyzer) -> Self {
        Self {
            input,
            output,
            solver,
            analyzer,
        }
    }

    /// Consumes the menu, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_options()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(Some(message)) => writeln!(self.output, "{message}")?,
                Ok(None) => break,
                // Not finding a shift is an outcome, not a failure.
                Err(CaesarError::BruteForce(e)) => {
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => {
                    warn!("menu operation failed: {e}");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
        Ok(())
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "Select mode:")?;
        writeln!(self.output, "1: Encrypt")?;
        writeln!(self.output, "2: Decrypt with known shift")?;
        writeln!(self.output, "3: Brute-force decrypt")?;
        writeln!(self.output, "4: Frequency analysis")?;
        writeln!(self.output, "5: Exit")?;
        self.output.flush()
    }

    /// Runs one operation. `Ok(None)` means input ended mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Option<String>, CaesarError> {
        match choice {
            MenuChoice::Encrypt | MenuChoice::Decrypt => {
                let Some(input) = self.prompt("Enter input file path:")? else {
                    return Ok(None);
                };
                let Some(output) = self.prompt("Enter output file path:")? else {
                    return Ok(None);
                };
                let Some(shift) = self.prompt("Enter shift (key):")? else {
                    return Ok(None);
                };
                let shift = parse_shift(&shift)?;
                let (input, output) = (PathBuf::from(input), PathBuf::from(output));

                if choice == MenuChoice::Encrypt {
                    files::encrypt_file(&input, &output, shift)?;
                    Ok(Some(format!("Encrypted with shift {shift}.")))
                } else {
                    files::decrypt_file(&input, &output, shift)?;
                    Ok(Some(format!("Decrypted with shift {shift}.")))
                }
            }
            MenuChoice::BruteForce => {
                let Some(input) = self.prompt("Enter input file path:")? else {
                    return Ok(None);
                };
                let Some(sample) =
                    self.prompt("Enter path to sample text file (empty for none):")?
                else {
                    return Ok(None);
                };
                let Some(output) = self.prompt("Enter output file path:")? else {
                    return Ok(None);
                };
                let sample = (!sample.is_empty()).then(|| PathBuf::from(sample));

                let found = files::brute_force_file(
                    &self.solver,
                    &PathBuf::from(input),
                    sample.as_deref(),
                    &PathBuf::from(output),
                )?;
                Ok(Some(format!("Successfully decrypted with shift: {}", found.shift)))
            }
            MenuChoice::Frequency => {
                let Some(input) = self.prompt("Enter input file path:")? else {
                    return Ok(None);
                };
                let estimate = files::estimate_file_shift(&self.analyzer, &PathBuf::from(input))?;
                Ok(Some(format!(
                    "Estimated shift: {} (most frequent letter '{}', {} occurrences)",
                    estimate.shift, estimate.letter, estimate.occurrences
                )))
            }
            MenuChoice::Exit => Ok(None),
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Runs the menu on stdin/stdout.
pub fn run_interactive(solver: BruteForceSolver, analyzer: FrequencyAnalyzer) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), solver, analyzer).run()
}

//! Whole-file operations.
//!
//! Thin glue between the filesystem and the in-memory transforms: read the
//! entire input, transform it, write the result verbatim.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::analysis::{BruteForceMatch, BruteForceSolver, FrequencyAnalyzer, ShiftEstimate};
use crate::cipher::{decrypt, encrypt};
use crate::error::CaesarError;

/// Reads a whole UTF-8 file, reporting a missing path as [`CaesarError::FileNotFound`].
pub fn read_text(path: &Path) -> Result<String, CaesarError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CaesarError::FileNotFound(path.to_path_buf()),
        _ => CaesarError::Io(e),
    })?;
    debug!(path = %path.display(), chars = text.chars().count(), "read input");
    Ok(text)
}

/// Writes `text` to `path`, creating or truncating it.
pub fn write_text(path: &Path, text: &str) -> Result<(), CaesarError> {
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

/// Encrypts `input` into `output`.
pub fn encrypt_file(input: &Path, output: &Path, shift: i64) -> Result<(), CaesarError> {
    let text = read_text(input)?;
    write_text(output, &encrypt(&text, shift))?;
    info!(shift, "encrypted {} -> {}", input.display(), output.display());
    Ok(())
}

/// Decrypts `input` into `output` with a known shift.
pub fn decrypt_file(input: &Path, output: &Path, shift: i64) -> Result<(), CaesarError> {
    let text = read_text(input)?;
    write_text(output, &decrypt(&text, shift))?;
    info!(shift, "decrypted {} -> {}", input.display(), output.display());
    Ok(())
}

/// Brute-forces `input` against an optional sample file.
///
/// The plaintext is written to `output` only when a shift is found. A
/// sample path that does not exist is an error, not an absent sample.
pub fn brute_force_file(
    solver: &BruteForceSolver,
    input: &Path,
    sample: Option<&Path>,
    output: &Path,
) -> Result<BruteForceMatch, CaesarError> {
    let ciphertext = read_text(input)?;
    let sample = sample.map(read_text).transpose()?;

    let found = solver.solve(&ciphertext, sample.as_deref())?;
    write_text(output, &found.plaintext)?;
    info!(shift = found.shift, "brute force succeeded");
    Ok(found)
}

/// Estimates the shift of `input` by frequency analysis.
pub fn estimate_file_shift(
    analyzer: &FrequencyAnalyzer,
    input: &Path,
) -> Result<ShiftEstimate, CaesarError> {
    let ciphertext = read_text(input)?;
    Ok(analyzer.estimate(&ciphertext)?)
}

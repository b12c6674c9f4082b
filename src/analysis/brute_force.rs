//! Brute-force shift search.
//!
//! Tries every shift from 1 up to the longest alphabet length and accepts
//! the first one whose decryption contains the leading fragment (the
//! "probe") of a known plaintext sample.

use thiserror::Error;
use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::cipher::decrypt;

/// Default number of leading sample characters searched for.
pub const PROBE_LEN: usize = 100;

/// Errors that can occur during brute-force search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BruteForceError {
    #[error("No known-plaintext sample supplied; could not determine shift automatically. Check manually.")]
    MissingSample,

    #[error("Could not determine shift automatically after {tried} attempts. Check manually.")]
    Exhausted { tried: usize },
}

/// A successful brute-force result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceMatch {
    /// The first shift whose decryption contained the probe.
    pub shift: i64,
    /// The ciphertext decrypted with `shift`.
    pub plaintext: String,
}

/// Brute-force solver with a configurable probe length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForceSolver {
    probe_len: usize,
}

impl Default for BruteForceSolver {
    fn default() -> Self {
        Self {
            probe_len: PROBE_LEN,
        }
    }
}

impl BruteForceSolver {
    /// Creates a solver with the default probe length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver that probes with the first `probe_len` sample characters.
    ///
    /// A zero length is raised to 1.
    pub fn with_probe_len(probe_len: usize) -> Self {
        Self {
            probe_len: probe_len.max(1),
        }
    }

    /// Returns the probe length.
    pub fn probe_len(&self) -> usize {
        self.probe_len
    }

    /// Candidate shifts in search order: `1..=33`.
    pub fn candidates() -> std::ops::RangeInclusive<i64> {
        1..=Alphabet::max_len() as i64
    }

    /// Searches for the shift that decrypts `ciphertext` into text containing
    /// the probe taken from `sample`.
    pub fn solve(
        &self,
        ciphertext: &str,
        sample: Option<&str>,
    ) -> Result<BruteForceMatch, BruteForceError> {
        let probe = match sample {
            Some(sample) if !sample.is_empty() => self.probe(sample),
            _ => return Err(BruteForceError::MissingSample),
        };

        let mut tried = 0;
        for shift in Self::candidates() {
            tried += 1;
            let plaintext = decrypt(ciphertext, shift);
            trace!(shift, "trying candidate shift");
            if plaintext.contains(probe.as_str()) {
                debug!(shift, "probe found in candidate plaintext");
                return Ok(BruteForceMatch { shift, plaintext });
            }
        }

        debug!(tried, "no candidate shift matched the probe");
        Err(BruteForceError::Exhausted { tried })
    }

    /// First `probe_len` characters of the sample (characters, not bytes).
    fn probe(&self, sample: &str) -> String {
        sample.chars().take(self.probe_len).collect()
    }
}

/// Brute-force search with the default probe length.
pub fn brute_force(
    ciphertext: &str,
    sample: Option<&str>,
) -> Result<BruteForceMatch, BruteForceError> {
    BruteForceSolver::default().solve(ciphertext, sample)
}

//! Single-letter frequency analysis.
//!
//! Assumes the most frequent letter of the plaintext is the Russian `о` and
//! reads the shift off the distance between it and the ciphertext's most
//! frequent letter. This is a heuristic: short or non-Russian texts give
//! wrong answers or an explicit error, never a guaranteed key.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::alphabet::Alphabet;

/// Letter assumed to be the most frequent in Russian plaintext.
pub const REFERENCE_LETTER: char = 'о';

/// Alphabet the shift is measured in.
const REFERENCE_ALPHABET: Alphabet = Alphabet::RussianLower;

/// Position of [`REFERENCE_LETTER`] in [`REFERENCE_ALPHABET`].
const REFERENCE_INDEX: usize = match REFERENCE_ALPHABET.index_of(REFERENCE_LETTER) {
    Some(index) => index,
    None => panic!("REFERENCE_LETTER must belong to REFERENCE_ALPHABET"),
};

/// Errors that can occur during frequency analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("Text contains no letters")]
    NoLetters,

    #[error("Most frequent letter '{letter}' is not a lowercase Russian letter; cannot estimate shift")]
    NotInReferenceAlphabet { letter: char },

    #[error("Reference letter '{0}' is not a lowercase Russian letter")]
    InvalidReference(char),
}

/// Letter counts of a text, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, usize)>,
    positions: HashMap<char, usize>,
}

impl FrequencyTable {
    /// Counts every alphabetic character of `text`, any script or case.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::default();
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            table.record(c);
        }
        table
    }

    fn record(&mut self, c: char) {
        match self.positions.get(&c) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(c, self.entries.len());
                self.entries.push((c, 1));
            }
        }
    }

    /// Occurrences of `c` (zero if absent).
    pub fn count(&self, c: char) -> usize {
        self.positions
            .get(&c)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// The most frequent letter and its count.
    ///
    /// Ties go to the letter that appeared first in the text.
    pub fn most_common(&self) -> Option<(char, usize)> {
        self.entries
            .iter()
            .copied()
            .fold(None, |best, entry| match best {
                Some((_, count)) if count >= entry.1 => best,
                _ => Some(entry),
            })
    }

    /// Number of distinct letters.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total number of letters counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Returns true if no letters were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(letter, count)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }
}

/// Result of a frequency-based estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEstimate {
    /// Estimated shift in `0..33`.
    pub shift: i64,
    /// The ciphertext's most frequent letter.
    pub letter: char,
    /// How often that letter occurs.
    pub occurrences: usize,
}

/// Estimates the shift against a fixed reference letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyAnalyzer {
    reference: char,
    reference_index: usize,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self {
            reference: REFERENCE_LETTER,
            reference_index: REFERENCE_INDEX,
        }
    }
}

impl FrequencyAnalyzer {
    /// Analyzer using `о` as the reference letter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with a custom reference letter from the lowercase Russian alphabet.
    pub fn with_reference(reference: char) -> Result<Self, FrequencyError> {
        let reference_index = REFERENCE_ALPHABET
            .index_of(reference)
            .ok_or(FrequencyError::InvalidReference(reference))?;
        Ok(Self {
            reference,
            reference_index,
        })
    }

    /// The reference letter.
    pub fn reference(&self) -> char {
        self.reference
    }

    /// Estimates the shift that produced `ciphertext`.
    pub fn estimate(&self, ciphertext: &str) -> Result<ShiftEstimate, FrequencyError> {
        let table = FrequencyTable::from_text(ciphertext);
        self.estimate_from_table(&table)
    }

    /// Estimates the shift from an already built table.
    pub fn estimate_from_table(
        &self,
        table: &FrequencyTable,
    ) -> Result<ShiftEstimate, FrequencyError> {
        let (letter, occurrences) = table.most_common().ok_or(FrequencyError::NoLetters)?;
        let index = REFERENCE_ALPHABET
            .index_of(letter)
            .ok_or(FrequencyError::NotInReferenceAlphabet { letter })?;

        let len = REFERENCE_ALPHABET.len();
        let shift = ((index + len - self.reference_index) % len) as i64;
        debug!(%letter, occurrences, shift, "frequency estimate");

        Ok(ShiftEstimate {
            shift,
            letter,
            occurrences,
        })
    }
}

/// Estimates the shift with the default reference letter `о`.
pub fn estimate_shift(ciphertext: &str) -> Result<ShiftEstimate, FrequencyError> {
    FrequencyAnalyzer::default().estimate(ciphertext)
}

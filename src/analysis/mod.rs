//! Shift recovery without the key.
//!
//! This module provides:
//! - Brute-force search validated by a known-plaintext sample
//! - Single-letter frequency analysis against the Russian letter `о`

pub mod brute_force;
pub mod frequency;

pub use brute_force::{brute_force, BruteForceError, BruteForceMatch, BruteForceSolver, PROBE_LEN};
pub use frequency::{
    estimate_shift, FrequencyAnalyzer, FrequencyError, FrequencyTable, ShiftEstimate,
    REFERENCE_LETTER,
};

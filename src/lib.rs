//! # Caesar - shift cipher over Cyrillic and Latin text
//!
//! A Caesar cipher that works on four alphabets at once: Russian upper and
//! lower case (33 letters each, `Ё`/`ё` included) and English upper and
//! lower case (26 letters each). Every letter moves within its own alphabet;
//! everything else passes through untouched.
//!
//! ## Overview
//!
//! - **Encrypt / decrypt** with a known shift ([`encrypt`], [`decrypt`])
//! - **Brute force** every shift against a known plaintext fragment
//!   ([`brute_force`])
//! - **Frequency analysis** assuming the most common plaintext letter is
//!   `о` ([`estimate_shift`])
//!
//! There is no security here: 33 keys are tried in microseconds.
//!
//! ## Example Usage
//!
//! ```rust
//! use caesar_cipher::{brute_force, decrypt, encrypt};
//!
//! let secret = encrypt("Привет, мир! Hello, world!", 3);
//! assert_eq!(secret, "Тулезх, плу! Khoor, zruog!");
//! assert_eq!(decrypt(&secret, 3), "Привет, мир! Hello, world!");
//!
//! let found = brute_force(&secret, Some("Привет")).unwrap();
//! assert_eq!(found.shift, 3);
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: The four alphabet tables and lookup
//! - [`cipher`]: Character and text shifting
//! - [`analysis`]: Brute-force and frequency-based shift recovery
//! - [`files`]: Whole-file read/transform/write
//! - [`menu`]: Interactive menu
//! - [`config`]: TOML configuration

pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod config;
pub mod error;
pub mod files;
pub mod menu;

// Re-export commonly used types at the crate root
pub use alphabet::Alphabet;
pub use analysis::{
    brute_force, estimate_shift, BruteForceError, BruteForceMatch, BruteForceSolver,
    FrequencyAnalyzer, FrequencyError, FrequencyTable, ShiftEstimate,
};
pub use cipher::{decrypt, encrypt, shift_char};
pub use config::{CipherConfig, ConfigError};
pub use error::{parse_shift, CaesarError};

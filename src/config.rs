//! Tool configuration.
//!
//! Stored as TOML in `~/.caesar/config.toml`. Every field is optional; a
//! missing file means defaults.
//!
//! ```toml
//! probe_len = 100
//! reference_letter = "о"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::analysis::{BruteForceSolver, FrequencyAnalyzer, PROBE_LEN, REFERENCE_LETTER};

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("probe_len must be at least 1")]
    InvalidProbeLength,

    #[error("reference_letter '{0}' is not a lowercase Russian letter")]
    InvalidReference(char),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

fn default_probe_len() -> usize {
    PROBE_LEN
}

fn default_reference_letter() -> char {
    REFERENCE_LETTER
}

/// Tunables for the shift-recovery operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    /// Leading sample characters used as the brute-force probe.
    #[serde(default = "default_probe_len")]
    pub probe_len: usize,

    /// Letter assumed most frequent in plaintext.
    #[serde(default = "default_reference_letter")]
    pub reference_letter: char,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            probe_len: PROBE_LEN,
            reference_letter: REFERENCE_LETTER,
        }
    }
}

impl CipherConfig {
    /// Load from the default location, or defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: CipherConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Checks field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_len == 0 {
            return Err(ConfigError::InvalidProbeLength);
        }
        if !Alphabet::RussianLower.contains(self.reference_letter) {
            return Err(ConfigError::InvalidReference(self.reference_letter));
        }
        Ok(())
    }

    /// Brute-force solver using `probe_len`.
    pub fn solver(&self) -> BruteForceSolver {
        BruteForceSolver::with_probe_len(self.probe_len)
    }

    /// Frequency analyzer using `reference_letter`.
    pub fn analyzer(&self) -> Result<FrequencyAnalyzer, ConfigError> {
        FrequencyAnalyzer::with_reference(self.reference_letter)
            .map_err(|_| ConfigError::InvalidReference(self.reference_letter))
    }

    /// Get the path to the default configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}

/// Get the configuration directory (`~/.caesar`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".caesar"))
        .ok_or(ConfigError::NoConfigDir)
}

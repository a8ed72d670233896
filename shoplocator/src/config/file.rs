//! Configuration file loading.
//!
//! Loads user configuration from an INI file with sensible defaults. A
//! missing file returns [`ConfigFile::default`]; a present but invalid
//! file is an error so a typo never silently runs the service with the
//! wrong settings.

use std::path::Path;

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse the config file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// A configuration value is out of range or the wrong type.
    #[error("invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigFile {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }
}

//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These
//! are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Locations dataset settings.
    pub dataset: DatasetSettings,
    /// Geocoding lookup settings.
    pub geocode: GeocodeSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Interface to bind, e.g. "127.0.0.1".
    pub bind_address: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Shared secret expected in the `x-api-key` header. `None` disables
    /// the check.
    pub api_key: Option<String>,
}

/// Locations dataset configuration.
#[derive(Debug, Clone)]
pub struct DatasetSettings {
    /// Path to the five-column locations file.
    pub path: PathBuf,
}

/// Geocoding configuration.
#[derive(Debug, Clone)]
pub struct GeocodeSettings {
    /// Geocode endpoint URL.
    pub endpoint: String,
    /// API key sent to the geocode endpoint, if required.
    pub api_key: Option<String>,
    /// City appended when a lookup omits one.
    pub default_city: String,
    /// State appended when a lookup omits one.
    pub default_state: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files.
    pub directory: PathBuf,
    /// Log filename.
    pub file_name: String,
}

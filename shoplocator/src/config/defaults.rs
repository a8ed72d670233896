//! Default values for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::geocode::DEFAULT_GEOCODE_ENDPOINT;

/// Default bind interface.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3002;

/// Default locations dataset path, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "database/locations.csv";

/// Default log directory.
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Default log filename.
pub const DEFAULT_LOG_FILE: &str = "shoplocator.log";

/// Default city for geocode lookups that omit one.
pub const DEFAULT_GEOCODE_CITY: &str = "SF";

/// Default state for geocode lookups that omit one.
pub const DEFAULT_GEOCODE_STATE: &str = "CA";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            dataset: DatasetSettings::default(),
            geocode: GeocodeSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

impl Default for GeocodeSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEOCODE_ENDPOINT.to_string(),
            api_key: None,
            default_city: DEFAULT_GEOCODE_CITY.to_string(),
            default_state: DEFAULT_GEOCODE_STATE.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            file_name: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

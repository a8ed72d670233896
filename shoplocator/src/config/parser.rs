//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct
//! fields. Parsing starts from `ConfigFile::default()` and overlays any
//! values found in the INI.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("bind_address") {
            let v = v.trim();
            if !v.is_empty() {
                config.server.bind_address = v.to_string();
            }
        }
        if let Some(v) = section.get("port") {
            config.server.port = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "server".to_string(),
                key: "port".to_string(),
                value: v.to_string(),
                reason: "must be a TCP port number (1-65535)".to_string(),
            })?;
        }
        if let Some(v) = section.get("api_key") {
            let v = v.trim();
            if !v.is_empty() {
                config.server.api_key = Some(v.to_string());
            }
        }
    }

    // [dataset] section
    if let Some(section) = ini.section(Some("dataset")) {
        if let Some(v) = section.get("path") {
            let v = v.trim();
            if !v.is_empty() {
                config.dataset.path = PathBuf::from(v);
            }
        }
    }

    // [geocode] section
    if let Some(section) = ini.section(Some("geocode")) {
        if let Some(v) = section.get("endpoint") {
            let v = v.trim();
            if !v.is_empty() {
                config.geocode.endpoint = v.to_string();
            }
        }
        if let Some(v) = section.get("api_key") {
            let v = v.trim();
            if !v.is_empty() {
                config.geocode.api_key = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("default_city") {
            let v = v.trim();
            if !v.is_empty() {
                config.geocode.default_city = v.to_string();
            }
        }
        if let Some(v) = section.get("default_state") {
            let v = v.trim();
            if !v.is_empty() {
                config.geocode.default_state = v.to_string();
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = PathBuf::from(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file_name = v.to_string();
            }
        }
    }

    Ok(config)
}

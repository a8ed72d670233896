//! Configuration for the shoplocator service.
//!
//! Settings are loaded from an INI file. Struct definitions live in
//! [`settings`], constants and the `Default` impl in [`defaults`], INI
//! parsing in [`parser`], and file loading in [`file`].
//!
//! A missing config file is not an error: the service runs on defaults,
//! and the CLI can override the interesting knobs per invocation.

mod defaults;
mod file;
mod parser;
mod settings;

pub use defaults::*;
pub use file::ConfigFileError;
pub use settings::{
    ConfigFile, DatasetSettings, GeocodeSettings, LoggingSettings, ServerSettings,
};

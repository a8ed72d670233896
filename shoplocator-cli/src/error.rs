//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and an appropriate exit code.

use std::fmt;
use std::io;
use std::process;

use shoplocator::config::ConfigFileError;
use shoplocator::dataset::DatasetError;
use shoplocator::geocode::GeocodeError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be read or contained invalid values
    Config(ConfigFileError),
    /// Failed to initialize logging
    LoggingInit(String),
    /// Locations dataset failed to load
    Dataset(DatasetError),
    /// Geocoding client could not be constructed
    Geocoder(GeocodeError),
    /// Tokio runtime failed to start
    Runtime(io::Error),
    /// Failed to bind the listen address
    Bind { addr: String, source: io::Error },
    /// HTTP server error
    Serve(io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Dataset(DatasetError::SourceUnavailable { .. }) => {
                eprintln!();
                eprintln!("The locations dataset could not be read. Check:");
                eprintln!("  1. The [dataset] path in your config file");
                eprintln!("  2. The --dataset flag, if you passed one");
            }
            CliError::Dataset(_) => {
                eprintln!();
                eprintln!("The dataset must contain one record per line:");
                eprintln!("  id, name, address, lat, lng");
                eprintln!("The load is all-or-nothing; fix the reported line and retry.");
            }
            CliError::Bind { .. } => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Port already in use: pick another with --port");
                eprintln!("  2. Privileged port: ports below 1024 need elevated rights");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Dataset(err) => write!(f, "Failed to load dataset: {}", err),
            CliError::Geocoder(err) => write!(f, "Failed to create geocode client: {}", err),
            CliError::Runtime(err) => write!(f, "Failed to start async runtime: {}", err),
            CliError::Bind { addr, source } => {
                write!(f, "Failed to bind {}: {}", addr, source)
            }
            CliError::Serve(err) => write!(f, "Server error: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

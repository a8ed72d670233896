//! ShopLocator CLI - serve the coffee-shop directory API.
//!
//! Boot sequence: load configuration (CLI flags override the INI file),
//! initialize logging, load the locations dataset (fatal on any parse
//! error — the service never runs on a partial dataset), then bind the
//! HTTP server and serve until Ctrl-C or a loopback `/shutdown` request.

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use shoplocator::api::{self, AppState};
use shoplocator::config::ConfigFile;
use shoplocator::dao::ShopDao;
use shoplocator::store::ShopStore;
use shoplocator::{dataset, logging};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "shoplocator")]
#[command(version = shoplocator::VERSION)]
#[command(about = "Location-based coffee shop directory service", long_about = None)]
struct Args {
    /// Path to the INI configuration file (default: ~/.shoplocator/config.ini)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen port from the config file
    #[arg(long)]
    port: Option<u16>,

    /// Override the locations dataset path from the config file
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Log at debug level (unless RUST_LOG overrides it)
    #[arg(long)]
    debug: bool,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        err.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = ConfigFile::load_from(&config_path).map_err(CliError::Config)?;

    // CLI flags win over the config file
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.dataset {
        config.dataset.path = path;
    }

    let _guard = logging::init_logging(
        &config.logging.directory,
        &config.logging.file_name,
        args.debug,
    )
    .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    tracing::info!(
        version = shoplocator::VERSION,
        config = %config_path.display(),
        "starting shoplocator"
    );

    let dataset = dataset::load_file(&config.dataset.path).map_err(CliError::Dataset)?;
    let store = Arc::new(ShopStore::from_dataset(dataset));
    let dao = ShopDao::new(store);
    let state = AppState::from_config(dao, &config).map_err(CliError::Geocoder)?;

    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    runtime.block_on(async move {
        let addr = format!("{}:{}", config.server.bind_address, config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| CliError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(addr = %addr, "listening");
        api::serve(listener, state).await.map_err(CliError::Serve)
    })?;

    tracing::info!("shoplocator stopped");
    Ok(())
}

/// Default config location: `~/.shoplocator/config.ini`.
fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shoplocator")
        .join("config.ini")
}

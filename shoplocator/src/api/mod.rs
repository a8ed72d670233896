//! HTTP surface for the directory service.
//!
//! Thin translation layer between the wire and the core: handlers parse
//! requests, invoke the DAO / geo queries, and map structured errors to
//! status codes. Route paths and DTOs live in [`types`], request handlers
//! in [`handlers`], and the API-key gate in [`middleware`].
//!
//! The core itself never formats user-facing messages; everything the
//! client sees is assembled here.

pub mod handlers;
pub mod middleware;
pub mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::ConfigFile;
use crate::dao::ShopDao;
use crate::geocode::{GeocodeClient, GeocodeError};

use types::{
    ROUTE_INFO, ROUTE_ITEM, ROUTE_ITEMS_COUNT, ROUTE_ITEMS_GEO, ROUTE_ITEMS_NEAREST,
    ROUTE_ITEM_BY_ID, ROUTE_LOCATE, ROUTE_SHUTDOWN,
};

/// Handle used to request and await process shutdown.
///
/// Cloneable; the `/shutdown` handler calls [`request`](Self::request)
/// and the server loop awaits [`wait`](Self::wait).
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    inner: Arc<Notify>,
}

impl ShutdownHandle {
    /// Create a fresh handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Safe to call before anyone is waiting.
    pub fn request(&self) {
        self.inner.notify_one();
    }

    /// Wait until shutdown has been requested.
    pub async fn wait(&self) {
        self.inner.notified().await;
    }
}

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Mutation engine and store access.
    pub dao: ShopDao,
    /// Address → coordinates lookup client.
    pub geocoder: Arc<GeocodeClient>,
    /// City appended to geocode lookups that omit one.
    pub geocode_city: String,
    /// State appended to geocode lookups that omit one.
    pub geocode_state: String,
    /// Shared secret for the `x-api-key` header; `None` disables the gate.
    pub api_key: Option<String>,
    /// Shutdown coordination.
    pub shutdown: ShutdownHandle,
}

impl AppState {
    /// Assemble the application state from configuration.
    pub fn from_config(dao: ShopDao, config: &ConfigFile) -> Result<Self, GeocodeError> {
        let geocoder = GeocodeClient::new(
            config.geocode.endpoint.clone(),
            config.geocode.api_key.clone(),
        )?;

        Ok(Self {
            dao,
            geocoder: Arc::new(geocoder),
            geocode_city: config.geocode.default_city.clone(),
            geocode_state: config.geocode.default_state.clone(),
            api_key: config.server.api_key.clone(),
            shutdown: ShutdownHandle::new(),
        })
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_INFO, get(handlers::service_info))
        .route(ROUTE_ITEM, post(handlers::upsert_item))
        .route(
            ROUTE_ITEM_BY_ID,
            get(handlers::find_item).delete(handlers::delete_item),
        )
        .route(ROUTE_ITEMS_GEO, get(handlers::items_within_radius))
        .route(ROUTE_ITEMS_NEAREST, get(handlers::nearest_item))
        .route(ROUTE_ITEMS_COUNT, get(handlers::item_count))
        .route(ROUTE_LOCATE, get(handlers::locate_address))
        .route(ROUTE_SHUTDOWN, post(handlers::request_shutdown))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::check_api_key,
        ))
        .with_state(state)
}

/// Serve the API until shutdown is requested or the process is
/// interrupted. In-flight requests are drained before returning.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    let shutdown = state.shutdown.clone();
    let app = router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        tokio::select! {
            _ = shutdown.wait() => {
                tracing::warn!("shutdown requested via endpoint");
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::error!(error = %err, "ctrl-c handler failed");
                }
                tracing::info!("interrupt received, shutting down");
            }
        }
    })
    .await
}

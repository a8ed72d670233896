//! Request handlers: wire parsing in, DAO and geo calls, error mapping
//! out.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dao::DaoError;
use crate::geo::{self, GeoPoint, GeoQueryError, DEFAULT_RADIUS_KM};
use crate::geocode::GeocodeError;
use crate::shop::{ShopId, ShopInput};

use super::types::{CountResponse, ErrorResponse, LocateQuery, RadiusQuery, ServiceInfo};
use super::AppState;

/// Service banner: name, version, description.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: crate::SERVICE_NAME.to_string(),
        version: crate::VERSION.to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
    })
}

/// `GET /shop/v1/item/:id`
pub async fn find_item(State(state): State<AppState>, Path(id): Path<ShopId>) -> Response {
    match state.dao.find_by_id(id) {
        Ok(shop) => (StatusCode::OK, Json(shop)).into_response(),
        Err(err) => {
            tracing::warn!(id, error = %err, "find by id failed");
            dao_error_response(err)
        }
    }
}

/// `POST /shop/v1/item` — create when the payload has no id, update
/// otherwise.
pub async fn upsert_item(
    State(state): State<AppState>,
    Json(input): Json<ShopInput>,
) -> Response {
    match state.dao.upsert(input) {
        Ok(shop) => (StatusCode::OK, Json(shop)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "upsert rejected");
            dao_error_response(err)
        }
    }
}

/// `DELETE /shop/v1/item/:id` — soft delete.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<ShopId>) -> Response {
    match state.dao.delete(id) {
        Ok(shop) => (StatusCode::OK, Json(shop)).into_response(),
        Err(err) => {
            tracing::warn!(id, error = %err, "delete rejected");
            dao_error_response(err)
        }
    }
}

/// `GET /shop/v1/items/geo/:lat/:lng?radius_km=` — active shops strictly
/// within the radius.
pub async fn items_within_radius(
    State(state): State<AppState>,
    Path((lat, lng)): Path<(f64, f64)>,
    Query(query): Query<RadiusQuery>,
) -> Response {
    let target = GeoPoint::new(lat, lng);
    let radius_km = query.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    let shops = geo::within_radius(state.dao.store(), target, radius_km);
    (StatusCode::OK, Json(shops)).into_response()
}

/// `GET /shop/v1/items/nearest/:lat/:lng` — single closest active shop.
pub async fn nearest_item(
    State(state): State<AppState>,
    Path((lat, lng)): Path<(f64, f64)>,
) -> Response {
    let target = GeoPoint::new(lat, lng);
    match geo::nearest(state.dao.store(), target) {
        Ok(shop) => (StatusCode::OK, Json(shop)).into_response(),
        Err(err @ GeoQueryError::NoActiveShops) => {
            tracing::warn!(target = %target, "nearest query on empty active set");
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(err.to_string()))).into_response()
        }
    }
}

/// `GET /shop/v1/items/count` — number of active records.
pub async fn item_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.dao.store().count(),
    })
}

/// `GET /shop/v1/locate?street=&city=&state=&zip=` — resolve an address
/// to coordinates via the geocoding service.
pub async fn locate_address(
    State(state): State<AppState>,
    Query(query): Query<LocateQuery>,
) -> Response {
    let city = query.city.unwrap_or_else(|| state.geocode_city.clone());
    let region = query.state.unwrap_or_else(|| state.geocode_state.clone());
    let zip = query.zip.unwrap_or_default();

    match state
        .geocoder
        .find_coordinates(&query.street, &city, &region, &zip)
        .await
    {
        Ok(resolved) => (StatusCode::OK, Json(resolved)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "geocode lookup failed");
            let status = match err {
                GeocodeError::NoResults(_) => StatusCode::NOT_FOUND,
                GeocodeError::Http(_) | GeocodeError::Json(_) => StatusCode::BAD_GATEWAY,
            };
            (status, Json(ErrorResponse::new(err.to_string()))).into_response()
        }
    }
}

/// `POST /shutdown` — loopback-only; schedules a graceful shutdown after
/// the response has been flushed.
pub async fn request_shutdown(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    if !addr.ip().is_loopback() {
        tracing::warn!(peer = %addr, "shutdown refused for non-loopback peer");
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("shutdown is only allowed from loopback")),
        )
            .into_response();
    }

    tracing::warn!(peer = %addr, "shutdown requested, draining requests");
    let shutdown = state.shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        shutdown.request();
    });

    (StatusCode::OK, "shutting service down...").into_response()
}

/// Map a DAO error to its transport representation.
pub(super) fn dao_error_response(err: DaoError) -> Response {
    let status = match &err {
        DaoError::NotFound(_) => StatusCode::NOT_FOUND,
        DaoError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        DaoError::AlreadyDeleted(_) => StatusCode::CONFLICT,
    };

    let details = match &err {
        DaoError::ValidationFailed(errors) => Some(errors.clone()),
        _ => None,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            details,
        }),
    )
        .into_response()
}

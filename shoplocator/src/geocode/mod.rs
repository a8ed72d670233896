//! Address → coordinates lookup against an external geocoding JSON API.
//!
//! The [`GeocodeClient`] queries a Google-style geocode endpoint
//! (`?address=...` returning `{ status, results: [...] }`) and extracts
//! the formatted address plus location of the first result. The endpoint
//! URL is configurable, which doubles as the test seam.
//!
//! The client holds a reusable `reqwest::Client` with connection pooling
//! and a request timeout; a failed lookup is reported to the caller and
//! never retried here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Default HTTP timeout for geocode lookups.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default geocoding endpoint.
pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Error type for geocode lookups.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The HTTP request failed or returned a non-success status.
    #[error("geocode request failed: {0}")]
    Http(String),

    /// The response body was not the expected JSON shape.
    #[error("geocode response malformed: {0}")]
    Json(String),

    /// The service answered but found no coordinates for the address.
    #[error("unable to locate coordinates for address: {0}")]
    NoResults(String),
}

/// A successfully resolved address.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAddress {
    /// The service's formatted rendering of the address.
    pub address: String,
    /// Resolved coordinates.
    #[serde(flatten)]
    pub location: GeoPoint,
}

/// Top-level geocode response. Only the fields we need are deserialized.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeoPoint,
}

/// Client for a Google-style geocoding JSON API.
pub struct GeocodeClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeocodeClient {
    /// Create a client for the given endpoint.
    ///
    /// `api_key`, when present, is sent as the `key` query parameter.
    pub fn new(endpoint: String, api_key: Option<String>) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    /// Find coordinates for a street address.
    ///
    /// The components are joined into a single `street, city, state, zip`
    /// query. Returns the first result the service reports.
    pub async fn find_coordinates(
        &self,
        street: &str,
        city: &str,
        state: &str,
        zip: &str,
    ) -> Result<ResolvedAddress, GeocodeError> {
        let address = format!("{street}, {city}, {state}, {zip}");
        tracing::debug!(address = %address, "geocode lookup");

        let mut query: Vec<(&str, &str)> = vec![("address", &address)];
        if let Some(key) = &self.api_key {
            query.push(("key", key));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Http(format!(
                "geocode endpoint returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        let data: GeocodeResponse =
            serde_json::from_slice(&bytes).map_err(|e| GeocodeError::Json(e.to_string()))?;

        parse_first_result(data, &address)
    }
}

/// Extract the first result, or report that the address resolved to
/// nothing.
fn parse_first_result(
    data: GeocodeResponse,
    address: &str,
) -> Result<ResolvedAddress, GeocodeError> {
    if data.status != "OK" {
        return Err(GeocodeError::NoResults(address.to_string()));
    }

    let hits = data.results.len();
    let first = data
        .results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NoResults(address.to_string()))?;

    if hits > 1 {
        tracing::debug!(hits, "geocode returned multiple results, using the first");
    }

    Ok(ResolvedAddress {
        address: first.formatted_address,
        location: first.geometry.location,
    })
}

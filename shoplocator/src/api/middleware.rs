//! API-key middleware.
//!
//! When the server is configured with a shared secret, every request must
//! carry it in the `x-api-key` header; mismatches are rejected with 401
//! before any handler runs. Without a configured key the gate is open.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{ErrorResponse, API_KEY_HEADER};
use super::AppState;

/// Verify the shared-secret header against the configured key.
pub async fn check_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = &state.api_key {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if provided != Some(expected.as_str()) {
            tracing::warn!(provided = ?provided, "invalid api key");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("invalid api key")),
            )
                .into_response();
        }
    }

    next.run(request).await
}

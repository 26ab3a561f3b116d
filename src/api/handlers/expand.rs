//! Handler for short key resolution.

use axum::{Json, extract::State, http::Uri};
use serde_json::json;
use tracing::{debug, error};

use crate::api::dto::expand::ExpandResponse;
use crate::error::{AppError, ShortenerError};
use crate::state::AppState;

/// Resolves a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{key}`, or any deeper path whose last segment is the key
/// (`GET /some/prefix/{key}`). The path is percent-decoded before the key is
/// taken, so `/3NBE4X%4B` resolves `3NBE4XK`.
///
/// # Response
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the last path segment is empty (`/`, `/abc/`)
/// or the decoded path is not valid UTF-8.
/// Returns 404 Not Found if no URL is stored under the key.
/// Returns 500 Internal Server Error on storage failures.
pub async fn expand_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<ExpandResponse>, AppError> {
    let path = urlencoding::decode(uri.path()).map_err(|_| {
        AppError::bad_request("Path is not valid UTF-8", json!({ "path": uri.path() }))
    })?;
    let key = last_segment(&path);

    if key.is_empty() {
        return Err(AppError::bad_request(
            "Short key is required",
            json!({ "path": path }),
        ));
    }

    let long_url = state.shortener.expand(key).await.map_err(|err| match err {
        ShortenerError::NotFound(_) => {
            debug!("Short key not found: {}", key);
            AppError::not_found("Short key not found", json!({ "key": key }))
        }
        other => {
            error!("Failed to resolve short key {}: {}", key, other);
            AppError::internal("Failed to resolve short key", json!({ "key": key }))
        }
    })?;

    Ok(Json(ExpandResponse { long_url }))
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

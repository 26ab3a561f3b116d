//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use tracing::{error, warn};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::{AppError, ShortenerError};
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/3NBE4XK" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or `url` is empty.
/// Returns 500 Internal Server Error if the URL fails validation or the
/// store rejects the write.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let short_url = state
        .shortener
        .shorten(&payload.url)
        .await
        .map_err(|err| {
            match &err {
                ShortenerError::InvalidUrl(_) => warn!("Rejected URL: {}", err),
                _ => error!("Failed to store short link: {}", err),
            }

            AppError::internal(
                "Failed to shorten URL",
                json!({ "url": payload.url, "reason": err.to_string() }),
            )
        })?;

    Ok(Json(ShortenResponse { short_url }))
}

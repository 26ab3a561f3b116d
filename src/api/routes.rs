//! API route configuration.

use crate::api::handlers::{expand_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and resolution routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short URL
/// - `GET  /`         - Rejected with 400 (no key)
/// - `GET  /{*path}`  - Resolve the key in the last path segment
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/", get(expand_handler))
        .route("/{*path}", get(expand_handler))
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Storage health check
//! - `POST /shorten`  - Create a short URL
//! - `GET  /{*path}`  - Resolve the key in the last path segment
//!
//! `/health` is matched before the key wildcard. Generated keys are always
//! seven characters long, so no key is ever shadowed by it.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

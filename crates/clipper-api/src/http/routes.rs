//! HTTP route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Create the router.
///
/// ```text
/// POST /v1/messages - Extension message (SAVE_TO_NOTION, SAVE_SELECTION, LATEST_ANSWER)
/// GET  /health      - Health check
/// ```
///
/// CORS is permissive: the caller is an extension background context with
/// its own origin.
pub fn create_router(state: AppState) -> Router {
    let message_routes = Router::new()
        .route("/messages", post(handlers::post_message))
        .with_state(state);

    Router::new()
        .nest("/v1", message_routes)
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

//! Message and health handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use clipper_protocols::{ExtensionMessage, SaveResult};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Accept one extension message and reply with its save result.
///
/// Capture kinds always answer `200`; the outcome is carried in `ok`.
/// An inbound `NOTION_SAVE_RESULT` is answered with `400`.
pub async fn post_message(
    State(state): State<AppState>,
    Json(message): Json<ExtensionMessage>,
) -> impl IntoResponse {
    let kind = message.kind();
    debug!(kind, "Received extension message");

    if let ExtensionMessage::NotionSaveResult(_) = message {
        warn!(kind, "Unexpected inbound message kind");
        let reply = ExtensionMessage::from(SaveResult::failure(format!(
            "Unexpected message kind: {}",
            kind
        )));
        return (StatusCode::BAD_REQUEST, Json(reply));
    }

    let result = state.service.handle_message(message).await;
    (StatusCode::OK, Json(ExtensionMessage::from(result)))
}

/// Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

//! Application state.

use std::sync::Arc;

use clipper_runtime::CaptureService;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CaptureService>,
}

impl AppState {
    pub fn new(service: Arc<CaptureService>) -> Self {
        Self { service }
    }
}

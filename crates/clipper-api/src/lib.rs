//! # Clipper API
//!
//! Local HTTP endpoint the browser extension posts capture messages to.
//!
//! ```text
//! POST /v1/messages  - ExtensionMessage in, NOTION_SAVE_RESULT out
//! GET  /health       - Liveness and version
//! ```

pub mod http;
pub mod server;
pub mod state;

pub use http::routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;

#[cfg(test)]
mod test_support;

//! # Clipper Runtime
//!
//! The capture pipeline shared by the HTTP API and the CLI. One call to
//! [`CaptureService::save`] is one user action: validate, assemble, log
//! locally, submit once, and report a single [`SaveResult`](clipper_protocols::SaveResult).

pub mod service;

pub use service::{assembler_config, CaptureService};

//! # Clipper Protocols
//!
//! Shared definitions for the Clipper workspace: the capture data model,
//! the messages exchanged with the browser extension, and the traits
//! implemented by the collaborators (Notion submission, local history).
//! Contains no I/O.
//!
//! ## Core Traits
//!
//! - [`PageSubmitter`] - Creates a page from an assembled [`Document`]
//! - [`HistoryStore`] - Append-only local log of captures

pub mod error;
pub mod history;
pub mod message;
pub mod submitter;
pub mod types;

pub use error::{CaptureError, HistoryError, SubmitError};
pub use history::{HistoryEntry, HistoryStore};
pub use message::{CapturePayload, ExtensionMessage, SaveResult};
pub use submitter::{PageSubmitter, SubmitReceipt, NOT_CONFIGURED_MESSAGE};
pub use types::*;

//! # Clipper History
//!
//! Local side log of capture attempts.
//!
//! - [`FileHistoryStore`] appends entries to a JSON Lines file
//! - [`MemoryHistoryStore`] keeps entries in process, for tests

mod store;

pub use store::{next_id, FileHistoryStore, MemoryHistoryStore};

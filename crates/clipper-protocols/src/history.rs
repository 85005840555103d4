//! Local history protocol.
//!
//! The history is a side log of capture attempts. It is written on every
//! save attempt and never consulted by the save pipeline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::types::Capture;

/// Append-only store of captures.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a capture, assigning it the next id.
    async fn append(&self, capture: &Capture) -> Result<HistoryEntry, HistoryError>;

    /// All entries in append order.
    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
}

/// One logged capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Capture time in Unix milliseconds, strictly increasing per store.
    pub id: i64,

    #[serde(flatten)]
    pub capture: Capture,

    /// ISO-8601 UTC time the entry was written.
    pub saved_at: String,
}

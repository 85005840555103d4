//! History storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use clipper_core::format_timestamp;
use clipper_protocols::{Capture, HistoryEntry, HistoryError, HistoryStore};

/// Next entry id: `now_ms`, or `last + 1` when the clock has not advanced.
pub fn next_id(last: Option<i64>, now_ms: i64) -> i64 {
    match last {
        Some(last) if now_ms <= last => last + 1,
        _ => now_ms,
    }
}

fn new_entry(capture: &Capture, last: Option<i64>) -> HistoryEntry {
    let now = Utc::now();
    HistoryEntry {
        id: next_id(last, now.timestamp_millis()),
        capture: capture.clone(),
        saved_at: format_timestamp(now),
    }
}

/// In-memory history store for testing.
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistoryStore {
    /// Create a new memory store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, capture: &Capture) -> Result<HistoryEntry, HistoryError> {
        let mut entries = self.entries.lock().await;
        let entry = new_entry(capture, entries.last().map(|e| e.id));
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.lock().await.clone())
    }
}

/// File backed history store.
///
/// Entries are stored one per line as JSON:
/// ```text
/// {"id":1714566645000,"answerText":"...","questionText":"...","pageUrl":null,"mode":"full","savedAt":"..."}
/// ```
pub struct FileHistoryStore {
    path: PathBuf,
    /// Id of the newest entry; held across the write so ids stay ordered.
    last_id: Mutex<Option<i64>>,
}

impl FileHistoryStore {
    /// Open (or create) the history file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let last_id = if fs::try_exists(&path).await? {
            read_entries(&path).await?.last().map(|e| e.id)
        } else {
            None
        };

        debug!("FileHistoryStore opened at {:?}, last id {:?}", path, last_id);

        Ok(Self {
            path,
            last_id: Mutex::new(last_id),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn append(&self, capture: &Capture) -> Result<HistoryEntry, HistoryError> {
        let mut last_id = self.last_id.lock().await;
        let entry = new_entry(capture, *last_id);

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        *last_id = Some(entry.id);
        debug!(id = entry.id, "History entry appended");
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        read_entries(&self.path).await
    }
}

async fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>, HistoryError> {
    let content = fs::read(path).await?;
    let mut entries = Vec::new();

    for (index, raw) in content.split(|b| *b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping non-UTF-8 history line {} in {:?}: {}", index + 1, path, e);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<HistoryEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping corrupt history line {} in {:?}: {}", index + 1, path, e),
        }
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

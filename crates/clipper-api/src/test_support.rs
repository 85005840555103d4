//! Shared fixtures for handler and server tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use clipper_core::AssemblerConfig;
use clipper_history_local::MemoryHistoryStore;
use clipper_protocols::{Document, PageSubmitter, SubmitError, SubmitReceipt};
use clipper_runtime::CaptureService;

use crate::state::AppState;

pub(crate) struct StubSubmitter {
    pub configured: bool,
    pub status: Option<u16>,
    pub calls: AtomicUsize,
}

impl StubSubmitter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSubmitter for StubSubmitter {
    fn id(&self) -> &str {
        "stub"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn submit(&self, _document: &Document) -> Result<SubmitReceipt, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.status {
            Some(status) => Err(SubmitError::Api {
                status,
                message: format!("{} Bad Request", status),
            }),
            None => Ok(SubmitReceipt::default()),
        }
    }
}

pub(crate) fn stub_state(
    configured: bool,
    status: Option<u16>,
) -> (AppState, Arc<StubSubmitter>, Arc<MemoryHistoryStore>) {
    let submitter = Arc::new(StubSubmitter {
        configured,
        status,
        calls: AtomicUsize::new(0),
    });
    let history = Arc::new(MemoryHistoryStore::new());
    let service = CaptureService::new(AssemblerConfig::default(), submitter.clone())
        .with_history(history.clone());
    (AppState::new(Arc::new(service)), submitter, history)
}

//! Capture service.

use std::sync::Arc;

use tracing::{error, info, warn};

use clipper_config::CaptureConfig;
use clipper_core::{assemble, AssemblerConfig};
use clipper_protocols::{
    Capture, CaptureError, Document, ExtensionMessage, HistoryStore, PageSubmitter, SaveResult,
    NOT_CONFIGURED_MESSAGE,
};

/// Assembly options from the `[capture]` config section.
pub fn assembler_config(config: &CaptureConfig) -> AssemblerConfig {
    AssemblerConfig {
        include_question: config.include_question,
        default_tags: config.default_tags.clone(),
    }
}

/// Runs one save attempt per user action.
pub struct CaptureService {
    assembler: AssemblerConfig,
    submitter: Arc<dyn PageSubmitter>,
    history: Option<Arc<dyn HistoryStore>>,
}

impl CaptureService {
    /// Create a service without a local history.
    pub fn new(assembler: AssemblerConfig, submitter: Arc<dyn PageSubmitter>) -> Self {
        Self {
            assembler,
            submitter,
            history: None,
        }
    }

    /// Log every save attempt to `history`.
    pub fn with_history(mut self, history: Arc<dyn HistoryStore>) -> Self {
        self.history = Some(history);
        self
    }

    /// Assembly options in use.
    pub fn assembler(&self) -> &AssemblerConfig {
        &self.assembler
    }

    /// Save a capture and report the outcome.
    pub async fn save(&self, capture: Capture) -> SaveResult {
        self.try_save(&capture).await.into()
    }

    /// Validate an inbound extension message and save it.
    pub async fn handle_message(&self, message: ExtensionMessage) -> SaveResult {
        let kind = message.kind();
        match message.into_capture() {
            Ok(capture) => self.save(capture).await,
            Err(e) => {
                warn!(kind, "Rejected message: {}", e);
                SaveResult::failure(e.to_string())
            }
        }
    }

    /// Validate and assemble without logging or submitting.
    pub fn preview(&self, capture: &Capture) -> Result<Document, CaptureError> {
        capture.validate()?;
        Ok(assemble(capture, &self.assembler))
    }

    async fn try_save(&self, capture: &Capture) -> Result<(), CaptureError> {
        if let Err(e) = capture.validate() {
            warn!(mode = %capture.mode, "Nothing to save: {}", e);
            return Err(e);
        }

        if !self.submitter.is_configured() {
            warn!(submitter = self.submitter.id(), "Submitter is not configured");
            return Err(CaptureError::ConfigurationMissing(
                NOT_CONFIGURED_MESSAGE.to_string(),
            ));
        }

        let document = assemble(capture, &self.assembler);

        if let Some(history) = &self.history {
            if let Err(e) = history.append(capture).await {
                warn!("Failed to write local history: {}", e);
            }
        }

        match self.submitter.submit(&document).await {
            Ok(receipt) => {
                info!(
                    submitter = self.submitter.id(),
                    mode = %capture.mode,
                    page_id = ?receipt.page_id,
                    "Capture saved"
                );
                Ok(())
            }
            Err(e) => {
                error!(submitter = self.submitter.id(), "Save failed: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

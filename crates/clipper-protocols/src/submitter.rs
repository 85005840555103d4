//! Page submission protocol.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::types::Document;

/// Reported when credentials or the target database are missing.
pub const NOT_CONFIGURED_MESSAGE: &str = "Set Notion token & database id in the config file";

/// Creates a page in the target document database.
///
/// Implementations make exactly one attempt per call: no retries, no
/// timeout policy of their own.
#[async_trait]
pub trait PageSubmitter: Send + Sync {
    /// Returns the submitter ID.
    fn id(&self) -> &str;

    /// Whether credentials and target are configured.
    fn is_configured(&self) -> bool {
        true
    }

    /// Create one page from the document.
    async fn submit(&self, document: &Document) -> Result<SubmitReceipt, SubmitError>;
}

/// What the remote service reported back for a created page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

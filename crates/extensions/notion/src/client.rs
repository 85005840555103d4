//! Notion API client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use clipper_config::Config;
use clipper_protocols::{
    Document, PageSubmitter, SubmitError, SubmitReceipt, NOT_CONFIGURED_MESSAGE,
};

use crate::payload::{PageCreateRequest, PayloadOptions};

/// Connection settings for [`NotionClient`].
#[derive(Clone)]
pub struct NotionClientConfig {
    pub token: String,
    pub database_id: String,
    pub api_base_url: String,
    pub api_version: String,
    pub payload: PayloadOptions,
}

impl From<&Config> for NotionClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            token: config.notion.token.trim().to_string(),
            database_id: config.notion.database_id.trim().to_string(),
            api_base_url: config.notion.api_base_url.clone(),
            api_version: config.notion.api_version.clone(),
            payload: PayloadOptions {
                include_timestamp: config.capture.include_timestamp,
            },
        }
    }
}

impl std::fmt::Debug for NotionClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClientConfig")
            .field("database_id", &self.database_id)
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

/// Creates pages in a Notion database.
pub struct NotionClient {
    config: NotionClientConfig,
    client: Client,
}

impl NotionClient {
    /// Create a new client.
    pub fn new(config: NotionClientConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .user_agent(concat!("clipper/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Endpoint pages are created at.
    pub fn pages_url(&self) -> String {
        format!("{}/pages", self.config.api_base_url.trim_end_matches('/'))
    }

    /// Build the request body for a document without sending it.
    pub fn build_request(&self, document: &Document) -> PageCreateRequest {
        PageCreateRequest::new(document, &self.config.database_id, self.config.payload)
    }
}

#[async_trait]
impl PageSubmitter for NotionClient {
    fn id(&self) -> &str {
        "notion"
    }

    fn is_configured(&self) -> bool {
        !self.config.token.is_empty() && !self.config.database_id.is_empty()
    }

    async fn submit(&self, document: &Document) -> Result<SubmitReceipt, SubmitError> {
        if !self.is_configured() {
            return Err(SubmitError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()));
        }

        let body = self.build_request(document);
        let url = self.pages_url();
        debug!(
            url = %url,
            children = body.children.len(),
            "Creating Notion page"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.token)
            .header("Notion-Version", &self.config.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = %status, detail = %detail, "Notion rejected page");
            return Err(SubmitError::Api {
                status: status.as_u16(),
                message: status.to_string(),
            });
        }

        let receipt = match response.json::<serde_json::Value>().await {
            Ok(page) => SubmitReceipt {
                page_id: page.get("id").and_then(|v| v.as_str()).map(str::to_string),
                url: page.get("url").and_then(|v| v.as_str()).map(str::to_string),
            },
            Err(e) => {
                warn!("Notion page created but response was unreadable: {}", e);
                SubmitReceipt::default()
            }
        };

        info!(page_id = ?receipt.page_id, "Notion page created");
        Ok(receipt)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

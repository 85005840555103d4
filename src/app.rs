//! Wiring from configuration to the capture service.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use clipper_config::{Config, ConfigLoader, ConfigValidator};
use clipper_history_local::FileHistoryStore;
use clipper_notion::{NotionClient, NotionClientConfig};
use clipper_runtime::{assembler_config, CaptureService};

/// Load and validate the configuration. A missing file means defaults.
pub(crate) fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = ConfigLoader::load_or_default(path)?;
    debug!("Configuration loaded from {}", path.display());

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in warnings {
        warn!("{}: {}", warning.path, warning.message);
    }

    Ok(config)
}

/// Notion client for the configured database.
pub(crate) fn notion_client(config: &Config) -> Result<NotionClient, Box<dyn std::error::Error>> {
    Ok(NotionClient::new(NotionClientConfig::from(config))?)
}

/// Build the capture service: Notion submitter plus the local history when enabled.
///
/// A history file that cannot be opened disables the local log for this
/// process; saves still go through.
pub(crate) async fn build_service(
    config: &Config,
) -> Result<CaptureService, Box<dyn std::error::Error>> {
    let submitter = Arc::new(notion_client(config)?);
    let service = CaptureService::new(assembler_config(&config.capture), submitter);

    if !config.history.enabled {
        return Ok(service);
    }

    match FileHistoryStore::open(&config.history.path).await {
        Ok(history) => Ok(service.with_history(Arc::new(history))),
        Err(e) => {
            warn!(
                "Local history disabled, cannot open {}: {}",
                config.history.path.display(),
                e
            );
            Ok(service)
        }
    }
}

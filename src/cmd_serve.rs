//! `serve` subcommand handler.

use std::sync::Arc;

use tracing::{info, warn};

use clipper_api::{ApiServer, AppState, ServerConfig};
use clipper_config::Config;

use crate::app;

/// Run the HTTP endpoint until Ctrl-C.
pub(crate) async fn handle_serve(
    config: &Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Clipper v{}", env!("CARGO_PKG_VERSION"));

    let service = app::build_service(config).await?;
    let mut server_config = ServerConfig::from(&config.server);
    if let Some(host) = host {
        server_config.host = host;
    }
    if let Some(port) = port {
        server_config.port = port;
    }

    let server = ApiServer::new(server_config, AppState::new(Arc::new(service)));

    info!("Clipper ready:");
    info!("  POST http://{}/v1/messages - Save a capture", server.addr());
    info!("  GET  http://{}/health      - Health check", server.addr());

    server.run_until(shutdown_signal()).await?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

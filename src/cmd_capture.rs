//! `save` and `preview` subcommand handlers.

use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tracing::info;

use clipper_config::Config;
use clipper_protocols::Capture;
use clipper_runtime::{assembler_config, CaptureService};

use crate::app;
use crate::cli::CaptureArgs;

/// Save one answer. A failed save is returned as its error string.
pub(crate) async fn handle_save(
    config: &Config,
    args: CaptureArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let capture = read_capture(args).await?;
    let service = app::build_service(config).await?;

    let result = service.save(capture).await;
    if result.ok {
        println!("Saved to Notion");
        return Ok(());
    }

    Err(result
        .error
        .unwrap_or_else(|| "Save failed".to_string())
        .into())
}

/// Print the page payload that `save` would send.
pub(crate) async fn handle_preview(
    config: &Config,
    args: CaptureArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let capture = read_capture(args).await?;
    let client = Arc::new(app::notion_client(config)?);
    let service = CaptureService::new(assembler_config(&config.capture), client.clone());

    let document = service.preview(&capture)?;
    let request = client.build_request(&document);
    info!(blocks = request.children.len(), "Preview built");

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Resolve the answer source and build a capture from the arguments.
pub(crate) async fn read_capture(args: CaptureArgs) -> Result<Capture, Box<dyn std::error::Error>> {
    let answer = match (args.answer, args.answer_file) {
        (Some(answer), _) => answer,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let mut capture = Capture::full(answer.trim()).with_question(args.question.trim());
    capture.mode = args.mode;
    if let Some(url) = args.url.filter(|u| !u.trim().is_empty()) {
        capture = capture.with_source_url(url.trim());
    }
    Ok(capture)
}

//! Clipper - save ChatGPT answers as Notion pages
//!
//! Main entry point for the Clipper CLI and local HTTP endpoint.

mod app;
mod cli;
mod cmd_capture;
mod cmd_history;
mod cmd_serve;

use std::process::ExitCode;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clipper_config::clipper_dir;

use crate::cli::{Cli, Commands};

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.clipper/logs/ with daily rotation. Console
/// output goes to stderr so `preview` and `history` output stays pipeable.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = clipper_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("clipper")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keeps the background writer alive for the program duration
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = app::load_config(&cli.config_path())?;

    match cli.command {
        Commands::Serve { host, port } => cmd_serve::handle_serve(&config, host, port).await,
        Commands::Save(args) => cmd_capture::handle_save(&config, args).await,
        Commands::Preview(args) => cmd_capture::handle_preview(&config, args).await,
        Commands::History { limit, format } => {
            cmd_history::handle_history(&config, limit, format).await
        }
    }
}

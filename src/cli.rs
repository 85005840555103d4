//! CLI definitions for Clipper.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use clipper_config::Config;
use clipper_protocols::CaptureMode;

/// Clipper CLI.
#[derive(Parser)]
#[command(name = "clipper")]
#[command(about = "Save ChatGPT answers as Notion pages")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.clipper/config.toml)
    #[arg(short, long, global = true, env = "CLIPPER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP endpoint for the browser extension
    Serve {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Save one answer to Notion
    Save(CaptureArgs),

    /// Print the Notion page payload without saving
    Preview(CaptureArgs),

    /// Show the local capture history
    History {
        /// Show only the newest N entries
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Capture input shared by `save` and `preview`.
///
/// The answer comes from `--answer`, `--answer-file`, or stdin.
#[derive(Args, Debug, Clone)]
pub(crate) struct CaptureArgs {
    /// Answer text
    #[arg(long, conflicts_with = "answer_file")]
    pub answer: Option<String>,

    /// Read the answer text from a file
    #[arg(long)]
    pub answer_file: Option<PathBuf>,

    /// Question that produced the answer
    #[arg(long, default_value = "")]
    pub question: String,

    /// Conversation URL
    #[arg(long)]
    pub url: Option<String>,

    /// Capture mode (full, highlight)
    #[arg(long, default_value = "full")]
    pub mode: CaptureMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

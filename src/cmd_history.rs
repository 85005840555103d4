//! `history` subcommand handler.

use clipper_config::Config;
use clipper_history_local::FileHistoryStore;
use clipper_protocols::{HistoryEntry, HistoryStore};

use crate::cli::OutputFormat;

/// Print the local capture log, oldest first.
pub(crate) async fn handle_history(
    config: &Config,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !config.history.path.exists() {
        println!("No history found.");
        return Ok(());
    }

    let store = FileHistoryStore::open(&config.history.path).await?;
    let entries = newest(store.list().await?, limit);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No history found.");
                return Ok(());
            }
            println!("{:<15} {:<25} {:<10} {}", "ID", "SAVED AT", "MODE", "TITLE");
            println!("{}", "-".repeat(80));
            for entry in &entries {
                println!(
                    "{:<15} {:<25} {:<10} {}",
                    entry.id,
                    entry.saved_at,
                    entry.capture.mode.as_str(),
                    summary(entry)
                );
            }
        }
    }

    Ok(())
}

/// Keep the last `limit` entries.
fn newest(mut entries: Vec<HistoryEntry>, limit: Option<usize>) -> Vec<HistoryEntry> {
    if let Some(limit) = limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }
    entries
}

/// One-line label: the question, or the start of the answer.
fn summary(entry: &HistoryEntry) -> String {
    let source = if entry.capture.has_question() {
        &entry.capture.question_text
    } else {
        &entry.capture.answer_text
    };
    let line = source.lines().next().unwrap_or_default();
    if line.chars().count() > 40 {
        format!("{}...", line.chars().take(37).collect::<String>())
    } else {
        line.to_string()
    }
}

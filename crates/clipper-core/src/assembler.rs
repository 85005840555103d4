//! Document assembly.
//!
//! Turns a capture into page properties plus the ordered block sequence:
//! an optional question callout, the segmented answer, and a footer that
//! records the capture mode.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use clipper_protocols::{Capture, CaptureMode, ContentBlock, Document, DocumentProperties};

use crate::segmenter::segment;

/// Title used when the capture has no question.
pub const DEFAULT_TITLE: &str = "ChatGPT Answer";

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Assembly options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Prepend the question as a callout block.
    pub include_question: bool,

    /// Labels applied to every saved page, in order.
    pub default_tags: Vec<String>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            include_question: true,
            default_tags: Vec::new(),
        }
    }
}

/// Assemble a document stamped with the current time.
pub fn assemble(capture: &Capture, config: &AssemblerConfig) -> Document {
    assemble_at(capture, config, Utc::now())
}

/// Assemble a document stamped with `now`.
pub fn assemble_at(capture: &Capture, config: &AssemblerConfig, now: DateTime<Utc>) -> Document {
    let properties = DocumentProperties {
        title: title_for(&capture.question_text),
        source_url: capture
            .source_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        tags: config.default_tags.clone(),
        saved_at: format_timestamp(now),
    };

    let mut blocks = Vec::new();
    if config.include_question && capture.has_question() {
        blocks.push(ContentBlock::callout(capture.question_text.clone()));
    }
    blocks.extend(segment(&capture.answer_text));
    blocks.push(ContentBlock::paragraph(footer_text(capture.mode)));

    debug!(
        mode = %capture.mode,
        blocks = blocks.len(),
        "Assembled document"
    );

    Document { properties, blocks }
}

/// Page title for a question: its first 200 characters, or the placeholder.
pub fn title_for(question: &str) -> String {
    if question.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    question.chars().take(TITLE_MAX_CHARS).collect()
}

/// Footer text recording how the page was captured.
pub fn footer_text(mode: CaptureMode) -> String {
    format!("Saved via ChatGPT → Notion ({})", mode)
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;

//! Content blocks.

use serde::{Deserialize, Serialize};

/// Language used for code blocks with no (or an unterminated) fence tag.
pub const PLAIN_TEXT_LANGUAGE: &str = "plain text";

/// A single rendering unit of the saved page, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph { text: String },
    Code { language: String, text: String },
    Callout { text: String },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        ContentBlock::Code {
            language: language.into(),
            text: text.into(),
        }
    }

    pub fn callout(text: impl Into<String>) -> Self {
        ContentBlock::Callout { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Paragraph { text }
            | ContentBlock::Code { text, .. }
            | ContentBlock::Callout { text } => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Code { .. } => "code",
            ContentBlock::Callout { .. } => "callout",
        }
    }
}

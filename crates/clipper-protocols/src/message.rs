//! Messages exchanged with the browser extension.
//!
//! The extension's page script, background context and this service talk
//! through a closed set of message kinds, discriminated by a `type` field.
//! Inbound capture messages are validated into a [`Capture`] before any
//! processing happens.

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;
use crate::types::{Capture, CaptureMode};

/// A message crossing the extension boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtensionMessage {
    /// In-page "Save to Notion" button.
    SaveToNotion { payload: CapturePayload },

    /// Context-menu "Save selection to Notion".
    #[serde(rename_all = "camelCase")]
    SaveSelection {
        #[serde(default)]
        selection_text: String,
        #[serde(default)]
        page_url: Option<String>,
    },

    /// Latest answer sent in reply to the save-latest keyboard shortcut.
    #[serde(rename_all = "camelCase")]
    LatestAnswer {
        #[serde(default)]
        answer_text: String,
        #[serde(default)]
        question_text: String,
        #[serde(default)]
        page_url: Option<String>,
    },

    /// Outcome of a save, sent back to the extension.
    NotionSaveResult(SaveResult),
}

impl ExtensionMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtensionMessage::SaveToNotion { .. } => "SAVE_TO_NOTION",
            ExtensionMessage::SaveSelection { .. } => "SAVE_SELECTION",
            ExtensionMessage::LatestAnswer { .. } => "LATEST_ANSWER",
            ExtensionMessage::NotionSaveResult(_) => "NOTION_SAVE_RESULT",
        }
    }

    /// Validate an inbound capture message into a [`Capture`].
    ///
    /// Text fields are trimmed, blank page URLs are dropped, and a blank
    /// answer or selection is rejected with [`CaptureError::EmptyInput`].
    pub fn into_capture(self) -> Result<Capture, CaptureError> {
        let capture = match self {
            ExtensionMessage::SaveToNotion { payload } => payload.into_capture(),
            ExtensionMessage::SaveSelection {
                selection_text,
                page_url,
            } => Capture {
                answer_text: selection_text.trim().to_string(),
                question_text: String::new(),
                source_url: non_blank(page_url),
                mode: CaptureMode::Highlight,
            },
            ExtensionMessage::LatestAnswer {
                answer_text,
                question_text,
                page_url,
            } => Capture {
                answer_text: answer_text.trim().to_string(),
                question_text: question_text.trim().to_string(),
                source_url: non_blank(page_url),
                mode: CaptureMode::Full,
            },
            ExtensionMessage::NotionSaveResult(_) => {
                return Err(CaptureError::InvalidMessage(
                    "NOTION_SAVE_RESULT is an outbound message".to_string(),
                ));
            }
        };

        capture.validate()?;
        Ok(capture)
    }
}

/// Payload of a [`ExtensionMessage::SaveToNotion`] message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturePayload {
    #[serde(default)]
    pub answer_text: String,

    #[serde(default)]
    pub question_text: String,

    #[serde(default, alias = "sourceUrl")]
    pub page_url: Option<String>,

    #[serde(default)]
    pub mode: CaptureMode,
}

impl CapturePayload {
    fn into_capture(self) -> Capture {
        Capture {
            answer_text: self.answer_text.trim().to_string(),
            question_text: self.question_text.trim().to_string(),
            source_url: non_blank(self.page_url),
            mode: self.mode,
        }
    }
}

/// Single success/failure notification for one user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResult {
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveResult {
    pub fn success() -> Self {
        Self { ok: true, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

impl From<Result<(), CaptureError>> for SaveResult {
    fn from(result: Result<(), CaptureError>) -> Self {
        match result {
            Ok(()) => SaveResult::success(),
            Err(e) => SaveResult::failure(e.to_string()),
        }
    }
}

impl From<SaveResult> for ExtensionMessage {
    fn from(result: SaveResult) -> Self {
        ExtensionMessage::NotionSaveResult(result)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;

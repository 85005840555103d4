//! Capture types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

/// What the user captured.
///
/// Only changes the footer annotation of the saved page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// The whole assistant answer.
    #[default]
    Full,
    /// A user-made text selection.
    Highlight,
}

impl CaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMode::Full => "full",
            CaptureMode::Highlight => "highlight",
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(CaptureMode::Full),
            "highlight" => Ok(CaptureMode::Highlight),
            other => Err(format!(
                "unknown capture mode '{}', expected 'full' or 'highlight'",
                other
            )),
        }
    }
}

/// One unit of captured text submitted for saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Answer or selection text. Must be non-blank.
    pub answer_text: String,

    /// The user question that preceded the answer, if known.
    #[serde(default)]
    pub question_text: String,

    /// URL of the originating page.
    #[serde(default, rename = "pageUrl", alias = "sourceUrl")]
    pub source_url: Option<String>,

    #[serde(default)]
    pub mode: CaptureMode,
}

impl Capture {
    /// Capture a full assistant answer.
    pub fn full(answer_text: impl Into<String>) -> Self {
        Self {
            answer_text: answer_text.into(),
            question_text: String::new(),
            source_url: None,
            mode: CaptureMode::Full,
        }
    }

    /// Capture a manual text selection. Selections never carry a question.
    pub fn highlight(selection_text: impl Into<String>) -> Self {
        Self {
            answer_text: selection_text.into(),
            question_text: String::new(),
            source_url: None,
            mode: CaptureMode::Highlight,
        }
    }

    pub fn with_question(mut self, question_text: impl Into<String>) -> Self {
        self.question_text = question_text.into();
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    /// Reject captures with no answer text.
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.answer_text.trim().is_empty() {
            return Err(CaptureError::EmptyInput);
        }
        Ok(())
    }

    pub fn has_question(&self) -> bool {
        !self.question_text.is_empty()
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;

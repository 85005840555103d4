//! Assembled document types.

use serde::{Deserialize, Serialize};

use super::block::ContentBlock;

/// Page properties derived from a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProperties {
    pub title: String,

    pub source_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// ISO-8601 UTC timestamp.
    pub saved_at: String,
}

/// Properties plus the ordered block sequence, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub properties: DocumentProperties,
    pub blocks: Vec<ContentBlock>,
}

impl Document {
    /// The trailing footer block, if any.
    pub fn footer(&self) -> Option<&ContentBlock> {
        self.blocks.last()
    }
}

//! Notion page-creation payload.
//!
//! Every content block maps to exactly one block object whose text is a
//! single plain-text rich text run.

use serde::Serialize;

use clipper_protocols::{ContentBlock, Document, DocumentProperties};

/// Emoji shown on the question callout.
pub const QUESTION_ICON: &str = "❓";

/// Payload shaping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadOptions {
    /// Send the `SavedAt` date property.
    pub include_timestamp: bool,
}

impl Default for PayloadOptions {
    fn default() -> Self {
        Self {
            include_timestamp: true,
        }
    }
}

/// Body of `POST /v1/pages`.
#[derive(Debug, Clone, Serialize)]
pub struct PageCreateRequest {
    pub parent: Parent,
    pub properties: PageProperties,
    pub children: Vec<BlockObject>,
}

impl PageCreateRequest {
    pub fn new(document: &Document, database_id: &str, options: PayloadOptions) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties: PageProperties::new(&document.properties, options),
            children: document.blocks.iter().map(BlockObject::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// Database properties of the created page.
#[derive(Debug, Clone, Serialize)]
pub struct PageProperties {
    #[serde(rename = "Title")]
    pub title: TitleProperty,

    #[serde(rename = "Source")]
    pub source: UrlProperty,

    #[serde(rename = "Tags")]
    pub tags: MultiSelectProperty,

    #[serde(rename = "SavedAt", skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateProperty>,
}

impl PageProperties {
    fn new(properties: &DocumentProperties, options: PayloadOptions) -> Self {
        Self {
            title: TitleProperty {
                title: vec![RichText::plain(&properties.title)],
            },
            source: UrlProperty {
                url: properties.source_url.clone(),
            },
            tags: MultiSelectProperty {
                multi_select: properties
                    .tags
                    .iter()
                    .map(|name| SelectOption { name: name.clone() })
                    .collect(),
            },
            saved_at: options.include_timestamp.then(|| DateProperty {
                date: DateValue {
                    start: properties.saved_at.clone(),
                },
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlProperty {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultiSelectProperty {
    pub multi_select: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateProperty {
    pub date: DateValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateValue {
    pub start: String,
}

/// A rich text run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text { text: TextContent },
}

impl RichText {
    pub fn plain(content: &str) -> Self {
        RichText::Text {
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}

/// A child block of the created page.
#[derive(Debug, Clone, Serialize)]
pub struct BlockObject {
    pub object: &'static str,

    #[serde(flatten)]
    pub block: BlockBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockBody {
    Callout { callout: CalloutBlock },
    Paragraph { paragraph: ParagraphBlock },
    Code { code: CodeBlock },
}

#[derive(Debug, Clone, Serialize)]
pub struct CalloutBlock {
    pub icon: Icon,
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub emoji: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParagraphBlock {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeBlock {
    pub language: String,
    pub rich_text: Vec<RichText>,
}

impl From<&ContentBlock> for BlockObject {
    fn from(block: &ContentBlock) -> Self {
        let block = match block {
            ContentBlock::Callout { text } => BlockBody::Callout {
                callout: CalloutBlock {
                    icon: Icon {
                        emoji: QUESTION_ICON.to_string(),
                    },
                    rich_text: vec![RichText::plain(text)],
                },
            },
            ContentBlock::Paragraph { text } => BlockBody::Paragraph {
                paragraph: ParagraphBlock {
                    rich_text: vec![RichText::plain(text)],
                },
            },
            ContentBlock::Code { language, text } => BlockBody::Code {
                code: CodeBlock {
                    language: language.clone(),
                    rich_text: vec![RichText::plain(text)],
                },
            },
        };

        Self {
            object: "block",
            block,
        }
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;

//! # Clipper Notion Extension
//!
//! Maps an assembled [`Document`](clipper_protocols::Document) onto Notion's
//! page-creation payload and submits it.
//!
//! - [`PageCreateRequest`] - the `POST /v1/pages` body
//! - [`NotionClient`] - [`PageSubmitter`](clipper_protocols::PageSubmitter) backed by `reqwest`

pub mod client;
pub mod payload;

pub use client::{NotionClient, NotionClientConfig};
pub use payload::{BlockObject, PageCreateRequest, PayloadOptions, QUESTION_ICON};

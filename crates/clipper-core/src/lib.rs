//! # Clipper Core
//!
//! Pure transformations from a [`Capture`](clipper_protocols::Capture) to a
//! [`Document`](clipper_protocols::Document):
//!
//! - [`segment`] splits captured text into paragraph and fenced code blocks
//! - [`normalize_language`] maps fence tags to block languages
//! - [`assemble`] builds page properties and the full block sequence
//!
//! Nothing here performs I/O; every function is total over its input.

pub mod assembler;
pub mod language;
pub mod segmenter;

pub use assembler::{
    assemble, assemble_at, footer_text, format_timestamp, title_for, AssemblerConfig,
    DEFAULT_TITLE, TITLE_MAX_CHARS,
};
pub use language::normalize_language;
pub use segmenter::segment;

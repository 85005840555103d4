//! Block segmentation of captured text.
//!
//! Text is scanned line by line. Lines starting with a triple backtick open
//! and close fenced code regions; everything else is grouped into
//! paragraphs separated by blank lines.

use clipper_protocols::{ContentBlock, PLAIN_TEXT_LANGUAGE};

use crate::language::normalize_language;

const FENCE: &str = "```";

/// Split captured text into paragraph and code blocks, in source order.
///
/// Never fails: an unterminated fence is flushed as a `"plain text"` code
/// block at end of input, and empty buffers never produce a block.
pub fn segment(text: &str) -> Vec<ContentBlock> {
    let mut segmenter = Segmenter::default();
    for line in text.split('\n') {
        segmenter.push_line(line);
    }
    segmenter.finish()
}

#[derive(Default)]
struct Segmenter<'a> {
    blocks: Vec<ContentBlock>,
    buffer: Vec<&'a str>,
    /// Raw tag of the open fence, `None` outside a fence.
    fence: Option<String>,
}

impl<'a> Segmenter<'a> {
    fn push_line(&mut self, line: &'a str) {
        if let Some(tag) = line.strip_prefix(FENCE) {
            match self.fence.take() {
                Some(open_tag) => self.flush_code(&normalize_language(&open_tag)),
                None => {
                    self.flush_paragraph();
                    self.fence = Some(tag.trim().to_string());
                }
            }
            return;
        }

        if self.fence.is_some() {
            self.buffer.push(line);
        } else if line.trim().is_empty() {
            self.flush_paragraph();
        } else {
            self.buffer.push(line);
        }
    }

    fn flush_paragraph(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = self.buffer.join(" ");
        self.buffer.clear();
        self.blocks.push(ContentBlock::paragraph(text));
    }

    fn flush_code(&mut self, language: &str) {
        if self.buffer.is_empty() {
            return;
        }
        let text = self.buffer.join("\n");
        self.buffer.clear();
        self.blocks.push(ContentBlock::code(language, text));
    }

    fn finish(mut self) -> Vec<ContentBlock> {
        if self.fence.take().is_some() {
            self.flush_code(PLAIN_TEXT_LANGUAGE);
        } else {
            self.flush_paragraph();
        }
        self.blocks
    }
}

#[cfg(test)]
#[path = "segmenter_tests.rs"]
mod tests;

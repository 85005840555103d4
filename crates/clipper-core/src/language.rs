//! Fence language normalization.

use clipper_protocols::PLAIN_TEXT_LANGUAGE;

/// Short fence tags and the language names they expand to.
const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("sh", "shell"),
];

/// Normalize a fence tag into a code block language.
///
/// The tag is trimmed and lowercased. Known short tags expand to their full
/// name, other tags pass through, and an empty tag becomes `"plain text"`.
/// Applying it twice gives the same result as applying it once.
pub fn normalize_language(tag: &str) -> String {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return PLAIN_TEXT_LANGUAGE.to_string();
    }

    ALIASES
        .iter()
        .find(|(short, _)| *short == tag)
        .map(|(_, full)| full.to_string())
        .unwrap_or(tag)
}

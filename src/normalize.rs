//! Whitespace normalization.
//!
//! Text out of PDF extractors and OCR is messy: hard-wrapped lines, tabs,
//! runs of spaces used for layout. Speech engines read all of it as a pause
//! of some length, so every run collapses to a single space.
//!
//! Normalizing erases paragraph breaks. Sentence splitting therefore runs on
//! the raw text first and normalizes each sentence afterwards.

/// Collapse every whitespace run into one space and trim both ends.
///
/// Idempotent: normalizing normalized text returns it unchanged.
///
/// ```rust
/// use speakable::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Hello,\n\n\tworld.  "), "Hello, world.");
/// assert_eq!(normalize_whitespace(" \t\n "), "");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

//! Word splitting: the last tier of the cascade.
//!
//! Words are atomic. A word longer than the budget (a URL, a chemical name,
//! an OCR run with no spaces) is emitted whole as its own chunk rather than
//! cut mid-token, since half a word is unpronounceable.

use crate::{Segment, Splitter};

/// Whitespace-level splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSplitter;

impl Splitter for WordSplitter {
    fn split(&self, text: &str) -> Vec<Segment> {
        text.split_whitespace().map(Segment::new).collect()
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

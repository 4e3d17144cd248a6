//! The Segment type: one unit of text produced by a splitter.

/// A sentence, clause fragment, or word, in source order.
///
/// Segments are the units the greedy packer works with. Their text is
/// already whitespace-normalized and never empty.
///
/// ## Paragraph Breaks
///
/// A blank line in the source is a pause the listener should hear. The
/// sentence splitter marks the first segment after one, and the packer
/// never joins a marked segment onto the chunk before it:
///
/// ```text
/// "Intro.\n\nBody one. Body two."
///
/// Segment 0: "Intro."     paragraph_break: false
/// Segment 1: "Body one."  paragraph_break: true   <- always opens a chunk
/// Segment 2: "Body two."  paragraph_break: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The segment text.
    pub text: String,
    /// Whether a paragraph break precedes this segment.
    pub paragraph_break: bool,
}

impl Segment {
    /// Create a segment that continues the current paragraph.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            paragraph_break: false,
        }
    }

    /// Create a segment that opens a new paragraph.
    #[must_use]
    pub fn after_break(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            paragraph_break: true,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.paragraph_break {
            f.write_str("\u{b6} ")?;
        }
        f.write_str(&self.text)
    }
}

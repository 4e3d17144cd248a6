//! Clause splitting on commas.
//!
//! The second tier of the cascade. A sentence too long for one chunk is
//! split on `,` plus any following whitespace, and the fragments are
//! re-packed joined by `", "`:
//!
//! ```text
//! "When the storm came, we closed the shutters, lit the lamps, and waited."
//!
//! -> ["When the storm came", "we closed the shutters", "lit the lamps",
//!     "and waited."]
//! ```
//!
//! A comma is the pause a reader already expects, so breaking there keeps
//! the prosody intact.
//!
//! A token made only of commas (OCR debris like `",,,,"`) is not a clause
//! boundary. It stays inside its fragment as an ordinary word, so the word
//! tier can still emit it.

use crate::{Segment, Splitter};

/// Comma-level splitter.
///
/// ```rust
/// use speakable::{ClauseSplitter, Splitter};
///
/// let segments = ClauseSplitter.split("red, green,blue,");
/// let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, vec!["red", "green", "blue"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseSplitter;

impl Splitter for ClauseSplitter {
    fn split(&self, text: &str) -> Vec<Segment> {
        let mut fragments = Vec::new();
        let mut open: Vec<&str> = Vec::new();

        for word in text.split_whitespace() {
            if word.chars().all(|c| c == ',') {
                open.push(word);
                continue;
            }
            for (i, piece) in word.split(',').enumerate() {
                if i > 0 {
                    close(&mut open, &mut fragments);
                }
                if !piece.is_empty() {
                    open.push(piece);
                }
            }
        }

        close(&mut open, &mut fragments);
        fragments
    }

    fn separator(&self) -> &'static str {
        ", "
    }

    fn name(&self) -> &'static str {
        "clause"
    }
}

fn close(open: &mut Vec<&str>, fragments: &mut Vec<Segment>) {
    if !open.is_empty() {
        fragments.push(Segment::new(open.join(" ")));
        open.clear();
    }
}

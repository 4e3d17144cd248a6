//! Sentence splitting.
//!
//! Splits text into sentences with punctuation heuristics, then normalizes
//! whitespace inside each sentence.
//!
//! ## Boundaries
//!
//! A boundary falls on a whitespace run when either:
//!
//! - the run follows `.`, `!` or `?`, or
//! - the run contains two or more consecutive newlines (a paragraph break).
//!
//! ```text
//! "It rained. We stayed in!\n\nNext day, sun."
//!           ^              ^^^^
//!   punctuation + space    blank line (paragraph break)
//!
//! -> ["It rained.", "We stayed in!", "Next day, sun."]
//! ```
//!
//! There is no abbreviation handling: `"Dr. Smith"` is two sentences. That
//! costs at most an early chunk boundary, which the packer then merges back
//! when both halves fit.
//!
//! ## Why Split Before Normalizing?
//!
//! Whitespace normalization turns a blank line into a single space, so a
//! paragraph break is only visible in the raw text. Splitting first keeps it.

use crate::normalize::normalize_whitespace;
use crate::{Segment, Splitter};

/// Sentence-level splitter: the first tier of the chunking cascade.
///
/// ## Example
///
/// ```rust
/// use speakable::{SentenceSplitter, Splitter};
///
/// let segments = SentenceSplitter.split("One. Two?\n\nThree!");
///
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[1].text, "Two?");
/// assert!(segments[2].paragraph_break);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl Splitter for SentenceSplitter {
    fn split(&self, text: &str) -> Vec<Segment> {
        split_segments(text)
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

/// Split text into normalized, non-empty sentences, in source order.
///
/// Text without terminal punctuation comes back as a single sentence. A run
/// of two or more newlines also ends a sentence; `'\r'` is ignored inside
/// the run, so CRLF blank lines (`"\r\n\r\n"`) count as paragraph breaks.
///
/// ```rust
/// use speakable::split_sentences;
///
/// assert_eq!(
///     split_sentences("Hello world. This is a test."),
///     vec!["Hello world.", "This is a test."]
/// );
/// assert_eq!(split_sentences("no punctuation  here"), vec!["no punctuation here"]);
/// assert_eq!(split_sentences("Title\r\n\r\nBody"), vec!["Title", "Body"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    split_segments(text).into_iter().map(|s| s.text).collect()
}

fn split_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending_break = false;
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !c.is_whitespace() {
            prev = Some(c);
            continue;
        }

        let mut newlines = 0usize;
        let mut paragraph = count_newline(c, &mut newlines);
        while let Some((_, w)) = chars.next_if(|&(_, w)| w.is_whitespace()) {
            paragraph |= count_newline(w, &mut newlines);
        }
        let end = chars.peek().map_or(text.len(), |&(j, _)| j);

        let terminal = matches!(prev, Some('.' | '!' | '?'));
        if terminal || paragraph {
            push_sentence(&mut segments, &text[start..i], &mut pending_break);
            pending_break |= paragraph;
            start = end;
        }
        prev = None;
    }

    if start < text.len() {
        push_sentence(&mut segments, &text[start..], &mut pending_break);
    }

    segments
}

/// Track consecutive newlines in a whitespace run; true once there are two.
/// `'\r'` does not interrupt the run, so `"\r\n\r\n"` counts.
fn count_newline(c: char, newlines: &mut usize) -> bool {
    match c {
        '\n' => {
            *newlines += 1;
            *newlines >= 2
        }
        '\r' => false,
        _ => {
            *newlines = 0;
            false
        }
    }
}

fn push_sentence(segments: &mut Vec<Segment>, raw: &str, pending_break: &mut bool) {
    let text = normalize_whitespace(raw);
    if text.is_empty() {
        return;
    }
    // A break before the first sentence is just leading whitespace.
    let segment = if *pending_break && !segments.is_empty() {
        Segment::after_break(text)
    } else {
        Segment::new(text)
    };
    *pending_break = false;
    segments.push(segment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_punctuation_needs_whitespace() {
        // decimals, URLs and initials glued to the next token stay whole
        let sentences = split_sentences("Pi is 3.14 today.Not split.");
        assert_eq!(sentences, vec!["Pi is 3.14 today.Not split."]);
    }

    #[test]
    fn test_no_abbreviation_handling() {
        let sentences = split_sentences("Dr. Smith arrived.");
        assert_eq!(sentences, vec!["Dr.", "Smith arrived."]);
    }

    #[test]
    fn test_ellipsis_ends_sentence() {
        let sentences = split_sentences("Wait... what?");
        assert_eq!(sentences, vec!["Wait...", "what?"]);
    }

    #[test]
    fn test_paragraph_break_without_punctuation() {
        let segments = SentenceSplitter.split("Chapter One\n\nIt was cold");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Chapter One");
        assert_eq!(segments[1].text, "It was cold");
        assert!(!segments[0].paragraph_break);
        assert!(segments[1].paragraph_break);
    }

    #[test]
    fn test_single_newline_is_not_a_break() {
        let sentences = split_sentences("hard wrapped\nline of text");
        assert_eq!(sentences, vec!["hard wrapped line of text"]);
    }

    #[test]
    fn test_newlines_separated_by_spaces_are_not_a_break() {
        let sentences = split_sentences("one\n \ntwo");
        assert_eq!(sentences, vec!["one two"]);
    }

    #[test]
    fn test_crlf_paragraph_break() {
        let segments = SentenceSplitter.split("First.\r\n\r\nSecond.");
        assert_eq!(segments.len(), 2);
        assert!(segments[1].paragraph_break);
    }

    #[test]
    fn test_punctuation_and_paragraph_in_one_run() {
        let segments = SentenceSplitter.split("End.  \n\n\n  Start.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "Start.");
        assert!(segments[1].paragraph_break);
    }

    #[test]
    fn test_sentence_after_break_only_is_marked() {
        let segments = SentenceSplitter.split("A.\n\nB. C.");
        let flags: Vec<bool> = segments.iter().map(|s| s.paragraph_break).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_leading_blank_lines_not_marked() {
        let segments = SentenceSplitter.split("\n\n\nFirst.");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].paragraph_break);
    }

    #[test]
    fn test_internal_whitespace_normalized() {
        let sentences = split_sentences("Too   many\tspaces here.  Next\n one.");
        assert_eq!(sentences, vec!["Too many spaces here.", "Next one."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(split_sentences("   \n\t  \n\n ").is_empty());
    }

    #[test]
    fn test_unicode_text() {
        let sentences = split_sentences("Привет мир! 世界。 Done?");
        assert_eq!(sentences, vec!["Привет мир!", "世界。 Done?"]);
    }
}

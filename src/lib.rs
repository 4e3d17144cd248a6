//! # speakable
//!
//! Text chunking for speech synthesis.
//!
//! ## The Problem
//!
//! Text-to-speech engines read one request at a time. Hand them a whole
//! page and playback starts late, prosody drifts, and some engines cut off
//! silently. Hand them fixed-size slices and they read half-words:
//!
//! ```text
//! Fixed 20-char slices of "The lighthouse keeper climbed the stairs."
//!
//! "The lighthouse keepe"  "r climbed the stairs"  "."
//!                     ^^^^^ unpronounceable
//! ```
//!
//! Good chunks are short, bounded, and end where a human reader would
//! pause anyway.
//!
//! ## The Cascade
//!
//! Prefer the coarsest natural break that keeps chunks within budget:
//!
//! ```text
//! 1. Split on sentence ends (". ", "! ", "? ") and blank lines
//! 2. Greedily pack sentences into chunks of at most `max_chars`
//! 3. Chunk still too long? (one very long sentence)
//!    Split it on commas and re-pack the clauses
//! 4. Clause still too long? Split it on whitespace and re-pack the words
//! 5. Single word longer than the budget? Emit it whole
//! ```
//!
//! Paragraph breaks always end a chunk, so the listener hears the pause the
//! author wrote.
//!
//! ## Guarantees
//!
//! - Chunks are never empty and never reordered.
//! - Every chunk fits the budget, except a single word that alone exceeds
//!   it, which is emitted verbatim as its own chunk.
//! - Whitespace is normalized: each run becomes one space.
//! - Pure: no I/O, no global state, linear in input length.
//!
//! What it does not do: language-aware sentence detection (`"Dr. Smith"`
//! splits after `"Dr."`), rebalancing chunk lengths, or enforcing a minimum
//! chunk size.
//!
//! ## Quick Start
//!
//! ```rust
//! use speakable::{chunk, SpeechChunker, Measure};
//!
//! let text = "Hello world. This is a test.";
//!
//! // One-shot, 280 characters per chunk
//! let chunks = chunk(text, speakable::DEFAULT_MAX_CHARS).unwrap();
//! assert_eq!(chunks, vec!["Hello world. This is a test."]);
//!
//! // Reusable, counting grapheme clusters instead of chars
//! let chunker = SpeechChunker::new(120).unwrap().with_measure(Measure::Graphemes);
//! let chunks = chunker.chunk(text);
//! ```
//!
//! ## Custom Cascades
//!
//! Each tier is a [`Splitter`]. Swap in your own (say, splitting on lines
//! for poetry) with [`SpeechChunker::with_splitters`]. Whatever is still over
//! budget after your last tier is broken on whitespace.

mod budget;
mod chunker;
mod clause;
mod error;
mod normalize;
mod packer;
mod segment;
mod sentence;
mod word;

pub use budget::{Budget, Measure, DEFAULT_MAX_CHARS};
pub use chunker::SpeechChunker;
pub use clause::ClauseSplitter;
pub use error::{Error, Result};
pub use normalize::normalize_whitespace;
pub use packer::{assemble, refine};
pub use segment::Segment;
pub use sentence::{split_sentences, SentenceSplitter};
pub use word::WordSplitter;

/// One tier of the chunking cascade.
///
/// A splitter breaks text into [`Segment`]s at its granularity; the packer
/// joins them back with [`separator`](Splitter::separator) up to the budget.
/// All splitters implement this trait, enabling custom cascades:
///
/// ```rust
/// use speakable::{ClauseSplitter, SentenceSplitter, Splitter, WordSplitter};
///
/// fn tiers() -> Vec<Box<dyn Splitter>> {
///     vec![Box::new(SentenceSplitter), Box::new(ClauseSplitter), Box::new(WordSplitter)]
/// }
///
/// let names: Vec<&str> = tiers().iter().map(|t| t.name()).collect();
/// assert_eq!(names, vec!["sentence", "clause", "word"]);
/// ```
pub trait Splitter: Send + Sync {
    /// Split text into normalized, non-empty segments, in source order.
    fn split(&self, text: &str) -> Vec<Segment>;

    /// The string placed between segments packed into the same chunk.
    fn separator(&self) -> &'static str {
        " "
    }

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Split text into speech-sized chunks of at most `max_chars` characters.
///
/// Shorthand for [`SpeechChunker::new`] followed by
/// [`SpeechChunker::chunk`].
///
/// # Errors
///
/// Returns [`Error::InvalidBudget`] if `max_chars == 0`.
///
/// # Examples
///
/// ```rust
/// use speakable::chunk;
///
/// let text = format!("{}. {}.", "A".repeat(150), "B".repeat(150));
/// let chunks = chunk(&text, 200).unwrap();
///
/// assert_eq!(chunks.len(), 2);
/// assert!(chunks[0].starts_with('A'));
/// assert!(chunks[1].starts_with('B'));
///
/// assert!(chunk("", 280).unwrap().is_empty());
/// assert!(chunk("anything", 0).is_err());
/// ```
pub fn chunk(text: &str, max_chars: usize) -> Result<Vec<String>> {
    Ok(SpeechChunker::new(max_chars)?.chunk(text))
}

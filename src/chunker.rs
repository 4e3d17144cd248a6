//! The configurable chunker: a budget plus a cascade of splitters.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::packer::{cascade, pack};
use crate::{
    normalize_whitespace, Budget, ClauseSplitter, Error, Measure, Result, SentenceSplitter,
    Splitter, WordSplitter,
};

/// Splits text into speech-sized chunks.
///
/// The first splitter's segments are packed greedily into chunks; any chunk
/// still over budget is refined by the remaining splitters in order. The
/// default cascade is sentence, then clause, then word.
///
/// `SpeechChunker` holds no mutable state and is cheap to clone; share one
/// across threads freely.
///
/// ## Example
///
/// ```rust
/// use speakable::SpeechChunker;
///
/// let chunker = SpeechChunker::new(40).unwrap();
/// let chunks = chunker.chunk(
///     "The tide came in. Gulls wheeled overhead, crying, diving, \
///      and fighting over scraps.",
/// );
///
/// assert_eq!(chunks[0], "The tide came in.");
/// assert!(chunks.iter().all(|c| c.chars().count() <= 40));
/// ```
#[derive(Clone)]
pub struct SpeechChunker {
    budget: Budget,
    splitters: Vec<Arc<dyn Splitter>>,
}

impl SpeechChunker {
    /// Create a chunker with a budget of `max_chars` characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBudget`] if `max_chars == 0`.
    pub fn new(max_chars: usize) -> Result<Self> {
        Ok(Self::with_budget(Budget::new(max_chars)?))
    }

    /// Create a chunker from an existing budget.
    #[must_use]
    pub fn with_budget(budget: Budget) -> Self {
        Self {
            budget,
            splitters: vec![
                Arc::new(SentenceSplitter),
                Arc::new(ClauseSplitter),
                Arc::new(WordSplitter),
            ],
        }
    }

    /// Count chunk length in a different unit.
    #[must_use]
    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.budget = self.budget.with_measure(measure);
        self
    }

    /// Replace the splitter cascade, coarsest first.
    ///
    /// Segments still over budget after the last splitter are broken on
    /// whitespace, so the cascade need not end with [`WordSplitter`]. Only a
    /// single word longer than the budget may exceed it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSplitters`] if `splitters` is empty.
    pub fn with_splitters(mut self, splitters: Vec<Arc<dyn Splitter>>) -> Result<Self> {
        if splitters.is_empty() {
            return Err(Error::NoSplitters);
        }
        self.splitters = splitters;
        Ok(self)
    }

    /// The budget chunks are held to.
    #[must_use]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Split text into ordered, non-empty chunks.
    ///
    /// Every chunk fits the budget except a single word longer than the
    /// budget, which is emitted whole. Empty or whitespace-only text yields
    /// no chunks.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let tiers: Vec<&dyn Splitter> = self.splitters.iter().map(AsRef::as_ref).collect();
        let Some((first, rest)) = tiers.split_first() else {
            return Vec::new();
        };

        let segments = first.split(text);
        let segment_count = segments.len();
        let assembled = if segments.is_empty() && !text.trim().is_empty() {
            vec![normalize_whitespace(text)]
        } else {
            pack(segments, first.separator(), self.budget, |oversized, chunks| {
                chunks.push(oversized);
            })
        };

        let mut chunks = Vec::with_capacity(assembled.len());
        let mut refined = 0usize;
        for chunk in assembled {
            if self.budget.fits(self.budget.measure(&chunk)) {
                chunks.push(chunk);
            } else {
                refined += 1;
                chunks.extend(cascade(&chunk, rest, self.budget));
            }
        }

        debug!(
            input_bytes = text.len(),
            segments = segment_count,
            refined,
            chunks = chunks.len(),
            max = self.budget.max(),
            "chunked text"
        );

        chunks
    }

    /// Estimate the number of chunks for a text of `text_len` units.
    ///
    /// A lower bound in practice: greedy packing rarely fills every chunk.
    #[must_use]
    pub fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.budget.max())
    }
}

impl Default for SpeechChunker {
    fn default() -> Self {
        Self::with_budget(Budget::default())
    }
}

impl fmt::Debug for SpeechChunker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.splitters.iter().map(|s| s.name()).collect();
        f.debug_struct("SpeechChunker")
            .field("budget", &self.budget)
            .field("splitters", &names)
            .finish()
    }
}

//! Greedy packing and overflow refinement.
//!
//! ## The Algorithm
//!
//! One pass, no backtracking. Keep an open chunk and a running length. For
//! each segment, charge its length plus the separator:
//!
//! ```text
//! budget = 30, separator = " " (cost 1)
//!
//! "It rained."      used  0 + 11 = 11  <= 30  append
//! "We stayed in."   used 11 + 14 = 25  <= 30  append
//! "Cards came out." used 25 + 16 = 41  >  30  close, open new
//!
//! -> ["It rained. We stayed in.", "Cards came out."]
//! ```
//!
//! The separator is charged on every segment, including the first, so the
//! running length overestimates the joined length by one separator. Chunks
//! come out slightly conservative, never over budget.
//!
//! ## Overflow Cascade
//!
//! A segment that alone exceeds the budget cannot be packed at this tier.
//! It is handed to the next, finer splitter:
//!
//! ```text
//! sentence ──too long──> clause (", ") ──too long──> word (" ") ──> verbatim
//! ```
//!
//! Each oversized piece is replaced in place by its sub-chunks, so chunk
//! order always follows the source. A cascade that stops short of the word
//! tier still gets a whitespace split after its last splitter.

use tracing::trace;

use crate::{Budget, ClauseSplitter, Segment, Splitter, WordSplitter};

/// Pack segments into chunks without splitting any segment.
///
/// Segments are joined with single spaces. A segment that opens a paragraph
/// always starts a new chunk. A segment longer than the budget is emitted
/// alone, as-is; [`refine`] breaks it down further.
///
/// ```rust
/// use speakable::{assemble, Budget, Segment};
///
/// let budget = Budget::new(20).unwrap();
/// let chunks = assemble(
///     vec![Segment::new("Short one."), Segment::new("Two."), Segment::new("Three.")],
///     budget,
/// );
/// assert_eq!(chunks, vec!["Short one. Two.", "Three."]);
/// ```
#[must_use]
pub fn assemble(segments: Vec<Segment>, budget: Budget) -> Vec<String> {
    pack(segments, " ", budget, |oversized, chunks| chunks.push(oversized))
}

/// Break an over-budget chunk on commas, then on whitespace.
///
/// Chunks already within budget come back unchanged. A single word longer
/// than the budget is the only chunk allowed to exceed it.
///
/// ```rust
/// use speakable::{refine, Budget};
///
/// let budget = Budget::new(16).unwrap();
/// assert_eq!(refine("fits fine", budget), vec!["fits fine"]);
/// assert_eq!(
///     refine("first part, second part, third", budget),
///     vec!["first part", "second part", "third"]
/// );
/// ```
#[must_use]
pub fn refine(chunk: &str, budget: Budget) -> Vec<String> {
    if budget.fits(budget.measure(chunk)) {
        return vec![chunk.to_string()];
    }
    let tiers: [&dyn Splitter; 2] = [&ClauseSplitter, &WordSplitter];
    cascade(chunk, &tiers, budget)
}

/// Split `text` with the first tier, handing oversized segments down the rest.
///
/// Past the last tier, text is broken on whitespace and any word still over
/// budget is emitted verbatim, so the size guarantee holds for any cascade.
/// A tier that finds nothing to split in non-blank text passes it on whole.
pub(crate) fn cascade(text: &str, tiers: &[&dyn Splitter], budget: Budget) -> Vec<String> {
    let Some((tier, rest)) = tiers.split_first() else {
        return split_words(text, budget);
    };

    let segments = tier.split(text);
    if segments.is_empty() && !text.trim().is_empty() {
        return cascade(text, rest, budget);
    }

    pack(segments, tier.separator(), budget, |oversized, chunks| {
        trace!(
            tier = tier.name(),
            len = budget.measure(&oversized),
            max = budget.max(),
            "refining oversized segment"
        );
        chunks.extend(cascade(&oversized, rest, budget));
    })
}

fn split_words(text: &str, budget: Budget) -> Vec<String> {
    pack(WordSplitter.split(text), " ", budget, |oversized, chunks| {
        trace!(
            len = budget.measure(&oversized),
            max = budget.max(),
            "emitting oversized word verbatim"
        );
        chunks.push(oversized);
    })
}

/// Greedily pack `segments` joined by `separator`.
///
/// `overflow` receives each segment that alone exceeds the budget, after the
/// open chunk has been closed, and appends whatever should replace it.
pub(crate) fn pack<F>(
    segments: Vec<Segment>,
    separator: &str,
    budget: Budget,
    mut overflow: F,
) -> Vec<String>
where
    F: FnMut(String, &mut Vec<String>),
{
    let cost = budget.measure(separator);
    let mut chunks = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut used = 0usize;

    for segment in segments {
        if segment.paragraph_break {
            close(&mut open, separator, &mut chunks);
            used = 0;
        }

        let len = budget.measure(&segment.text);
        let added = len.saturating_add(cost);

        if !budget.would_overflow(used, added) {
            open.push(segment.text);
            used += added;
            continue;
        }

        close(&mut open, separator, &mut chunks);
        if budget.fits(len) {
            open.push(segment.text);
            used = added;
        } else {
            used = 0;
            overflow(segment.text, &mut chunks);
        }
    }

    close(&mut open, separator, &mut chunks);
    chunks
}

fn close(open: &mut Vec<String>, separator: &str, chunks: &mut Vec<String>) {
    if !open.is_empty() {
        chunks.push(open.join(separator));
        open.clear();
    }
}

//! Chunk budget configuration.
//!
//! ## The Problem
//!
//! Speech engines have practical limits on how much text they accept per
//! call. Past a few hundred characters, prosody flattens, latency grows, and
//! some engines silently truncate. A budget caps each chunk.
//!
//! But "how long is this text?" has more than one answer:
//!
//! ```text
//! "naïve café"
//!   Bytes:     12  (UTF-8; ï and é take two bytes each)
//!   Chars:     10  (Unicode scalar values)
//!   Graphemes: 10  (user-perceived characters)
//!
//! "e\u{301}"   (e + combining acute accent)
//!   Bytes: 3, Chars: 2, Graphemes: 1
//! ```
//!
//! `Budget` pairs the limit with the [`Measure`] used to count against it.
//! The default is 280 characters, short enough for natural playback.

use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, Result};

/// Default maximum chunk length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 280;

/// How text length is counted against a [`Budget`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Measure {
    /// Unicode scalar values (`str::chars`).
    #[default]
    Chars,
    /// Extended grapheme clusters (UAX #29).
    Graphemes,
    /// UTF-8 bytes (`str::len`).
    Bytes,
}

impl Measure {
    /// Length of `text` in this unit.
    #[must_use]
    pub fn len(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Graphemes => text.graphemes(true).count(),
            Self::Bytes => text.len(),
        }
    }
}

/// Maximum length per chunk, and the unit it is counted in.
///
/// # Examples
///
/// ```rust
/// use speakable::{Budget, Measure};
///
/// let budget = Budget::new(280).unwrap();
/// assert_eq!(budget.max(), 280);
/// assert_eq!(budget.measure_unit(), Measure::Chars);
///
/// // Zero is rejected up front
/// assert!(Budget::new(0).is_err());
///
/// // Count what the listener hears, not what the encoder stores
/// let budget = Budget::new(10).unwrap().with_measure(Measure::Graphemes);
/// assert_eq!(budget.measure("e\u{301}"), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    max: usize,
    measure: Measure,
}

impl Budget {
    /// Create a budget of `max` characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBudget`] if `max == 0`.
    pub const fn new(max: usize) -> Result<Self> {
        if max == 0 {
            return Err(Error::InvalidBudget(max));
        }
        Ok(Self {
            max,
            measure: Measure::Chars,
        })
    }

    /// Count length in a different unit.
    #[must_use]
    pub const fn with_measure(self, measure: Measure) -> Self {
        Self { measure, ..self }
    }

    /// The maximum chunk length.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// The unit lengths are counted in.
    #[must_use]
    pub const fn measure_unit(&self) -> Measure {
        self.measure
    }

    /// Length of `text` in this budget's unit.
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        self.measure.len(text)
    }

    /// Whether a chunk of `len` units is within budget.
    #[must_use]
    pub const fn fits(&self, len: usize) -> bool {
        len <= self.max
    }

    /// Whether adding `additional` units to `current` would exceed the budget.
    #[must_use]
    pub const fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_CHARS,
            measure: Measure::Chars,
        }
    }
}

impl TryFrom<usize> for Budget {
    type Error = Error;

    fn try_from(max: usize) -> Result<Self> {
        Self::new(max)
    }
}

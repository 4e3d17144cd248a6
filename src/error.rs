//! Error types for speakable.

/// Errors that can occur when configuring a chunker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk budget (must be > 0).
    #[error("invalid chunk budget: {0} (must be > 0)")]
    InvalidBudget(usize),

    /// A chunker needs at least one splitter.
    #[error("splitter cascade must not be empty")]
    NoSplitters,
}

/// Result type for speakable operations.
pub type Result<T> = std::result::Result<T, Error>;

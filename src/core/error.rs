//! Construction-time errors.
//!
//! User intents (`choose`, `shuffle`, `restart`) never fail: an illegal tap
//! is a silent no-op. Only building a game from external configuration can
//! be rejected.

use thiserror::Error;

/// Errors raised while validating game or theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A signed pair count from outside the crate was negative.
    #[error("pair count must be non-negative, got {0}")]
    NegativePairCount(i64),

    /// Card ids are `2i` and `2i + 1`; they must fit in a `u32`.
    #[error("pair count {pair_count} exceeds the card id space")]
    TooManyPairs { pair_count: usize },

    /// A theme asked for pairs but supplied no content to put on them.
    #[error("theme {name:?} has no emojis for {pair_count} pairs")]
    EmptyTheme { name: String, pair_count: usize },
}

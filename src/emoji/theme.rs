//! Emoji themes: what goes on the cards.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// A named set of emojis and how many pairs to deal from it.
///
/// Pair `i` shows `emojis[i % emojis.len()]`, so a theme may deal more
/// pairs than it has emojis (repeats then form extra pairs of the same face).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiTheme {
    pub name: String,
    pub emojis: Vec<String>,
    pub pair_count: usize,
}

impl EmojiTheme {
    pub fn new(
        name: impl Into<String>,
        emojis: impl IntoIterator<Item = impl Into<String>>,
        pair_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            emojis: emojis.into_iter().map(Into::into).collect(),
            pair_count,
        }
    }

    /// Thirteen animals, four pairs.
    #[must_use]
    pub fn animals() -> Self {
        Self::new(
            "Animals",
            [
                "🐶", "🐸", "🐷", "🐔", "🐵", "🐮", "🐱", "🐯", "🐨", "🐥", "🐼", "🐰", "🐹",
            ],
            4,
        )
    }

    /// Deal a different number of pairs from the same emojis.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Content for pair `pair_index`.
    ///
    /// Returns `None` only for a theme with no emojis.
    #[must_use]
    pub fn content_for(&self, pair_index: usize) -> Option<&str> {
        if self.emojis.is_empty() {
            return None;
        }
        Some(&self.emojis[pair_index % self.emojis.len()])
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.pair_count > 0 && self.emojis.is_empty() {
            return Err(GameError::EmptyTheme {
                name: self.name.clone(),
                pair_count: self.pair_count,
            });
        }
        Ok(())
    }
}

//! Game configuration.
//!
//! The owning application decides how many pairs to deal, how long the
//! bonus window is, and whether deals are reproducible. Nothing in the
//! engine falls back to a hidden global game.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Face-up time a card may use before its match stops earning a bonus.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// Largest pair count whose card ids (`2i`, `2i + 1`) fit in a `u32`.
pub const MAX_PAIR_COUNT: usize = 1 << 31;

/// Configuration for one memory game.
///
/// ```
/// use std::time::Duration;
/// use memorize::core::GameConfig;
///
/// let config = GameConfig::new(4)
///     .with_bonus_time_limit(Duration::from_secs(10))
///     .with_seed(7);
///
/// assert_eq!(config.pair_count, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs in the deck (the deck holds twice as many cards).
    pub pair_count: usize,

    /// Per-card bonus window. Zero disables the bonus.
    pub bonus_time_limit: Duration,

    /// RNG seed for reproducible deals. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with the default bonus window and a random seed.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
        }
    }

    /// Build from a signed pair count, e.g. one read from a UI form or
    /// a foreign binding.
    pub fn try_from_pair_count(pair_count: i64) -> Result<Self, GameError> {
        let pair_count =
            usize::try_from(pair_count).map_err(|_| GameError::NegativePairCount(pair_count))?;
        let config = Self::new(pair_count);
        config.validate()?;
        Ok(config)
    }

    /// Set the bonus window.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Disable the bonus entirely.
    #[must_use]
    pub fn without_bonus(self) -> Self {
        self.with_bonus_time_limit(Duration::ZERO)
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards the deck will hold.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check the configuration can be dealt.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.pair_count > MAX_PAIR_COUNT {
            return Err(GameError::TooManyPairs {
                pair_count: self.pair_count,
            });
        }
        Ok(())
    }
}

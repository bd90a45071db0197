//! Cards: identity, content, and face-up/matched state.
//!
//! A `Card` is created by the engine and only mutated by it. Callers read
//! cards through `&Card` or snapshot copies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::bonus::BonusTimer;

/// Card identifier, unique within one deck.
///
/// Pair `i` gets ids `2i` and `2i + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The pair index this card was generated for.
    #[must_use]
    pub const fn pair_index(self) -> u32 {
        self.0 / 2
    }

    /// The other card of the same pair.
    #[must_use]
    pub const fn partner(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single card in a memory game.
///
/// `is_matched` is monotonic: once set it stays set for the life of the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    is_face_up: bool,
    is_matched: bool,
    bonus: BonusTimer,
}

impl<C> Card<C> {
    /// A face-down, unmatched card with a full bonus window.
    #[must_use]
    pub fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            bonus: BonusTimer::new(bonus_time_limit),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// Face-up and still in play: the only kind of card the
    /// one-face-up rule counts.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    /// Raw timer state.
    #[must_use]
    pub fn bonus(&self) -> &BonusTimer {
        &self.bonus
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus.limit()
    }

    /// Total time this card has spent face-up while unmatched.
    #[must_use]
    pub fn face_up_time(&self, now: Duration) -> Duration {
        self.bonus.face_up_time(now)
    }

    #[must_use]
    pub fn bonus_time_remaining(&self, now: Duration) -> Duration {
        self.bonus.remaining(now)
    }

    /// Fraction of the bonus window left, for drawing a countdown pie.
    #[must_use]
    pub fn bonus_remaining(&self, now: Duration) -> f64 {
        self.bonus.fraction_remaining(now)
    }

    /// Matched before the bonus window ran out.
    ///
    /// Matching stops the timer, so the answer no longer depends on time.
    #[must_use]
    pub fn has_earned_bonus(&self) -> bool {
        self.is_matched && self.bonus.past_face_up_time() < self.bonus.limit()
    }

    /// Face-up, unmatched, and with bonus time still draining.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Duration) -> bool {
        self.is_open() && self.bonus.remaining(now) > Duration::ZERO
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool, now: Duration) {
        self.is_face_up = face_up;
        if face_up && !self.is_matched {
            self.bonus.start(now);
        } else {
            self.bonus.stop(now);
        }
    }

    pub(crate) fn set_matched(&mut self, now: Duration) {
        self.is_matched = true;
        self.bonus.stop(now);
    }
}

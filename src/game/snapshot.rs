//! Read-only copies of a game for renderers.
//!
//! Snapshots share structure with the live deck through `im::Vector`, so
//! taking one after every intent is O(1) and later intents never show
//! through.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// The deck as it stood at `taken_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Serialize + Clone",
    deserialize = "C: Deserialize<'de> + Clone"
))]
pub struct GameSnapshot<C: Clone> {
    cards: Vector<Card<C>>,
    taken_at: Duration,
}

impl<C: Clone> GameSnapshot<C> {
    pub(crate) fn new(cards: Vector<Card<C>>, taken_at: Duration) -> Self {
        Self { cards, taken_at }
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// Clock reading when the snapshot was taken.
    ///
    /// Pass this to the card bonus accessors to render consistent timers.
    #[must_use]
    pub fn taken_at(&self) -> Duration {
        self.taken_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Position of a card in deck order.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Bonus fraction per card at `taken_at`, in deck order.
    #[must_use]
    pub fn bonus_fractions(&self) -> Vec<f64> {
        self.cards
            .iter()
            .map(|c| c.bonus_remaining(self.taken_at))
            .collect()
    }
}

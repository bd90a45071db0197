//! What a `choose` call did.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Result of [`MemoryGame::choose`](super::MemoryGame::choose).
///
/// Illegal taps are not errors: they report `Ignored` and change nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// Unknown id, already matched, or already face-up.
    Ignored,

    /// No card was waiting; `card` is now the sole face-up card.
    /// `flipped_down` lists previously face-up (matched) cards turned over.
    Opened {
        card: CardId,
        flipped_down: SmallVec<[CardId; 2]>,
    },

    /// `card` matched the waiting card; both are now matched and face-up.
    Matched { card: CardId, partner: CardId },

    /// `card` did not match; the waiting card `flipped_down` was turned
    /// over and `card` is the new sole face-up card.
    Mismatched { card: CardId, flipped_down: CardId },
}

impl ChooseOutcome {
    /// Did the call change any card?
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, ChooseOutcome::Ignored)
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, ChooseOutcome::Matched { .. })
    }

    /// The card that was turned face-up, if any.
    #[must_use]
    pub fn chosen(&self) -> Option<CardId> {
        match self {
            ChooseOutcome::Ignored => None,
            ChooseOutcome::Opened { card, .. }
            | ChooseOutcome::Matched { card, .. }
            | ChooseOutcome::Mismatched { card, .. } => Some(*card),
        }
    }
}

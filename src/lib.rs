//! # memorize
//!
//! A card-pairs memory game engine with bonus-time scoring.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the deck**: Callers read cards and issue intents
//!    (`choose`, `shuffle`, `restart`). Nothing else mutates a card.
//!
//! 2. **No-op over error**: An illegal tap (unknown id, matched card,
//!    face-up card) changes nothing and reports `ChooseOutcome::Ignored`.
//!    Only building a game from bad configuration returns an error.
//!
//! 3. **Derived selection**: The waiting face-up card is computed from the
//!    card flags, never cached, so it can't drift.
//!
//! 4. **Injected dependencies**: Pair count, content, seed and clock are
//!    all passed in. There is no global default game.
//!
//! ## Modules
//!
//! - `core`: RNG, clock, configuration, errors
//! - `cards`: Card identity, state and bonus-time bookkeeping
//! - `game`: The `MemoryGame` engine and its snapshots
//! - `emoji`: Emoji themes and the view-model a UI drives

pub mod cards;
pub mod core;
pub mod emoji;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameConfig, GameError, GameRng, GameRngState, ManualClock, SystemClock,
    DEFAULT_BONUS_TIME_LIMIT,
};

pub use crate::cards::{BonusTimer, Card, CardId};

pub use crate::game::{ChooseOutcome, ContentFactory, GameSnapshot, MemoryGame};

pub use crate::emoji::{EmojiMemoryGame, EmojiTheme};

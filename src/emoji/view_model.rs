//! The emoji game a front-end talks to.
//!
//! `EmojiMemoryGame` turns a theme into a `MemoryGame<String>`, forwards
//! user intents to it, and keeps presentation-only state that the engine
//! must not see. "Dealt" is such state: whether a card has left the
//! on-screen deck is an animation concern, so it lives here, keyed by
//! card id, and never inside `Card`.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::theme::EmojiTheme;
use crate::cards::{Card, CardId};
use crate::core::{Clock, GameConfig, GameError, SystemClock};
use crate::game::{ChooseOutcome, GameSnapshot, MemoryGame};

/// Time over which the whole deck's deal animations are staggered.
pub const TOTAL_DEAL_DURATION: Duration = Duration::from_secs(2);

/// Emoji memory game plus its dealing state.
pub struct EmojiMemoryGame<K = SystemClock> {
    theme: EmojiTheme,
    game: MemoryGame<String, K>,
    dealt: FxHashSet<CardId>,
}

impl EmojiMemoryGame<SystemClock> {
    /// Start a game on `theme` with a random deal and the system clock.
    pub fn new(theme: EmojiTheme) -> Result<Self, GameError> {
        Self::with_clock(theme, None, SystemClock::new())
    }
}

impl<K: Clock> EmojiMemoryGame<K> {
    /// Start a game with an optional fixed seed and a custom time source.
    pub fn with_clock(theme: EmojiTheme, seed: Option<u64>, clock: K) -> Result<Self, GameError> {
        theme.validate()?;

        let mut config = GameConfig::new(theme.pair_count);
        config.seed = seed;

        let emojis = theme.emojis.clone();
        let game = MemoryGame::with_config(
            config,
            move |pair_index| emojis[pair_index % emojis.len()].clone(),
            clock,
        )?;

        debug!(theme = %theme.name, pairs = theme.pair_count, "created emoji game");

        Ok(Self {
            theme,
            game,
            dealt: FxHashSet::default(),
        })
    }

    // === Intents ===

    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        self.game.choose(id)
    }

    pub fn shuffle(&mut self) {
        self.game.shuffle();
    }

    /// New deal; every card goes back into the on-screen deck.
    pub fn restart(&mut self) {
        self.dealt.clear();
        self.game.restart();
    }

    /// Move one card from the deck to the table.
    pub fn deal(&mut self, id: CardId) {
        if self.game.card(id).is_some() {
            self.dealt.insert(id);
        }
    }

    /// Move every card to the table.
    pub fn deal_all(&mut self) {
        self.dealt.extend(self.game.cards().iter().map(Card::id));
    }

    // === Presentation queries ===

    #[must_use]
    pub fn theme(&self) -> &EmojiTheme {
        &self.theme
    }

    /// Read-only access to the underlying engine.
    #[must_use]
    pub fn game(&self) -> &MemoryGame<String, K> {
        &self.game
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card<String>> {
        self.game.cards()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<String> {
        self.game.snapshot()
    }

    #[must_use]
    pub fn is_undealt(&self, id: CardId) -> bool {
        !self.dealt.contains(&id)
    }

    /// Cards still sitting in the on-screen deck, in deck order.
    #[must_use]
    pub fn undealt(&self) -> Vec<CardId> {
        self.game
            .cards()
            .iter()
            .map(Card::id)
            .filter(|id| self.is_undealt(*id))
            .collect()
    }

    /// Should the table draw this card?
    ///
    /// Undealt cards are still in the deck, and matched cards that were
    /// turned back over have left the table.
    #[must_use]
    pub fn is_on_table(&self, id: CardId) -> bool {
        match self.game.card(id) {
            Some(card) => !self.is_undealt(id) && !(card.is_matched() && !card.is_face_up()),
            None => false,
        }
    }

    /// Delay before a card's deal animation starts: cards further into the
    /// deck leave later, spreading the deal over `TOTAL_DEAL_DURATION`.
    #[must_use]
    pub fn deal_delay(&self, id: CardId) -> Duration {
        let count = self.game.cards().len();
        match self.game.index_of(id) {
            Some(index) if count > 0 => TOTAL_DEAL_DURATION.mul_f64(index as f64 / count as f64),
            _ => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    fn game() -> EmojiMemoryGame<ManualClock> {
        EmojiMemoryGame::with_clock(EmojiTheme::animals(), Some(11), ManualClock::new()).unwrap()
    }

    #[test]
    fn test_cards_from_theme() {
        let game = game();
        assert_eq!(game.cards().len(), 8);
        for card in game.cards().iter() {
            let expected = game.theme().content_for(card.id().pair_index() as usize).unwrap();
            assert_eq!(card.content(), expected);
        }
    }

    #[test]
    fn test_dealing() {
        let mut game = game();
        let first = game.cards()[0].id();

        assert_eq!(game.undealt().len(), 8);
        assert!(!game.is_on_table(first));

        game.deal(first);
        assert!(!game.is_undealt(first));
        assert!(game.is_on_table(first));
        assert_eq!(game.undealt().len(), 7);

        // Unknown ids are not tracked
        game.deal(CardId::new(500));
        assert_eq!(game.undealt().len(), 7);

        game.deal_all();
        assert!(game.undealt().is_empty());
    }

    #[test]
    fn test_restart_clears_dealt() {
        let mut game = game();
        game.deal_all();
        game.restart();
        assert_eq!(game.undealt().len(), 8);
    }

    #[test]
    fn test_deal_delay_staggers() {
        let game = game();
        let ids: Vec<_> = game.cards().iter().map(Card::id).collect();

        assert_eq!(game.deal_delay(ids[0]), Duration::ZERO);
        assert_eq!(game.deal_delay(ids[4]), Duration::from_secs(1));
        assert!(game.deal_delay(ids[7]) < TOTAL_DEAL_DURATION);
        assert_eq!(game.deal_delay(CardId::new(999)), Duration::ZERO);
    }

    #[test]
    fn test_empty_theme_rejected() {
        let theme = EmojiTheme::new("Blank", Vec::<String>::new(), 3);
        let result = EmojiMemoryGame::with_clock(theme, None, ManualClock::new());
        assert!(matches!(result, Err(GameError::EmptyTheme { .. })));
    }
}

//! The memory game engine.
//!
//! `MemoryGame` owns the deck and is the only thing that mutates cards.
//! A controller calls [`choose`](MemoryGame::choose),
//! [`shuffle`](MemoryGame::shuffle) and [`restart`](MemoryGame::restart) in
//! response to user actions, then re-reads [`cards`](MemoryGame::cards) or
//! takes a [`snapshot`](MemoryGame::snapshot) to redraw.
//!
//! ## The one-face-up rule
//!
//! At most one *unmatched* card is face-up after every operation. The
//! waiting card (the first pick of a pair) is not stored anywhere: it is
//! recomputed from the card flags each time it is needed, so shuffles and
//! restarts can't leave a stale index behind.
//!
//! ## Example
//!
//! ```
//! use memorize::{ChooseOutcome, MemoryGame};
//!
//! let mut game = MemoryGame::new(2, |pair| ["A", "B"][pair]);
//! assert_eq!(game.cards().len(), 4);
//!
//! let first_a = game.cards().iter().find(|c| *c.content() == "A").unwrap().id();
//! let outcome = game.choose(first_a);
//! assert!(outcome.changed());
//! assert_eq!(game.face_up_candidate().map(|c| c.id()), Some(first_a));
//!
//! // Choosing the same card again is a no-op
//! assert_eq!(game.choose(first_a), ChooseOutcome::Ignored);
//! ```

use std::fmt;
use std::time::Duration;

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::outcome::ChooseOutcome;
use super::snapshot::GameSnapshot;
use crate::cards::{Card, CardId};
use crate::core::{Clock, GameConfig, GameError, GameRng, GameRngState, SystemClock};

/// Builds the shared content for pair `i`.
pub type ContentFactory<C> = Box<dyn Fn(usize) -> C + Send + Sync>;

/// A single-player card-pairs game.
///
/// Generic over the card content `C` (anything comparable, e.g. an emoji
/// `String`) and the time source `K` used for bonus-time scoring.
pub struct MemoryGame<C: Clone, K = SystemClock> {
    config: GameConfig,
    make_content: ContentFactory<C>,
    rng: GameRng,
    clock: K,
    cards: Vector<Card<C>>,
}

impl<C: Clone + PartialEq> MemoryGame<C, SystemClock> {
    /// Deal `pair_count` pairs with the default bonus window, a random seed
    /// and the system clock.
    ///
    /// # Panics
    ///
    /// Panics if `pair_count` exceeds [`MAX_PAIR_COUNT`](crate::core::MAX_PAIR_COUNT).
    /// Use [`with_config`](Self::with_config) to get an error instead.
    pub fn new<F>(pair_count: usize, make_content: F) -> Self
    where
        F: Fn(usize) -> C + Send + Sync + 'static,
    {
        match Self::with_config(GameConfig::new(pair_count), make_content, SystemClock::new()) {
            Ok(game) => game,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<C: Clone + PartialEq, K: Clock> MemoryGame<C, K> {
    /// Deal a game from an explicit configuration and time source.
    pub fn with_config<F>(config: GameConfig, make_content: F, clock: K) -> Result<Self, GameError>
    where
        F: Fn(usize) -> C + Send + Sync + 'static,
    {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut game = Self {
            config,
            make_content: Box::new(make_content),
            rng,
            clock,
            cards: Vector::new(),
        };
        game.deal();
        Ok(game)
    }

    /// Build a fresh, shuffled deck from the stored configuration.
    fn deal(&mut self) {
        let limit = self.config.bonus_time_limit;
        let mut cards = Vec::with_capacity(self.config.card_count());

        for pair_index in 0..self.config.pair_count {
            let content = (self.make_content)(pair_index);
            // Fits: pair_count <= MAX_PAIR_COUNT was validated
            let id = (2 * pair_index) as u32;
            cards.push(Card::new(CardId::new(id), content.clone(), limit));
            cards.push(Card::new(CardId::new(id + 1), content, limit));
        }

        self.rng.shuffle(&mut cards);
        self.cards = Vector::from(cards);

        debug!(
            pair_count = self.config.pair_count,
            seed = self.rng.seed(),
            "dealt new deck"
        );
    }

    // === Intents ===

    /// Turn a card face-up and resolve any pending pair.
    ///
    /// Unknown ids, matched cards and face-up cards are ignored. Otherwise:
    ///
    /// - If one unmatched card is already waiting face-up, the chosen card
    ///   is compared with it. Equal content marks both matched and leaves
    ///   both face-up. Different content turns the waiting card face-down and
    ///   the chosen card becomes the new waiting card.
    /// - If nothing is waiting, every card is turned face-down and the chosen
    ///   card becomes the waiting card.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let Some(chosen) = self.index_of(id) else {
            trace!(%id, "ignored choose: no such card");
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_matched() || self.cards[chosen].is_face_up() {
            trace!(%id, "ignored choose: card already matched or face-up");
            return ChooseOutcome::Ignored;
        }

        let now = self.clock.now();
        let outcome = match self.face_up_candidate_index() {
            Some(waiting) => {
                let partner = self.cards[waiting].id();
                if self.cards[chosen].content() == self.cards[waiting].content() {
                    self.cards[chosen].set_matched(now);
                    self.cards[waiting].set_matched(now);
                    self.cards[chosen].set_face_up(true, now);
                    debug!(%id, %partner, "matched pair");
                    ChooseOutcome::Matched { card: id, partner }
                } else {
                    self.cards[waiting].set_face_up(false, now);
                    self.cards[chosen].set_face_up(true, now);
                    debug!(%id, flipped = %partner, "no match");
                    ChooseOutcome::Mismatched {
                        card: id,
                        flipped_down: partner,
                    }
                }
            }
            None => {
                let mut flipped_down = SmallVec::new();
                for card in self.cards.iter_mut().filter(|c| c.is_face_up()) {
                    card.set_face_up(false, now);
                    flipped_down.push(card.id());
                }
                self.cards[chosen].set_face_up(true, now);
                trace!(%id, flipped = flipped_down.len(), "opened card");
                ChooseOutcome::Opened {
                    card: id,
                    flipped_down,
                }
            }
        };

        debug_assert!(self.open_count() <= 1, "more than one unmatched card face-up");
        outcome
    }

    /// Re-randomize deck order. Card state is untouched.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<_> = self.cards.iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        self.cards = Vector::from(cards);
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Throw away the deck and deal a new one with the same configuration.
    ///
    /// The RNG stream carries on, so the new order differs from the first
    /// deal even for seeded games.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.deal();
    }

    // === Queries ===

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// Look a card up by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Position of a card in deck order.
    #[must_use]
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// The one unmatched face-up card, if there is exactly one.
    #[must_use]
    pub fn face_up_candidate(&self) -> Option<&Card<C>> {
        self.face_up_candidate_index().map(|i| &self.cards[i])
    }

    fn face_up_candidate_index(&self) -> Option<usize> {
        let mut open = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_open())
            .map(|(i, _)| i);

        match (open.next(), open.next()) {
            (Some(only), None) => Some(only),
            (None, _) => None,
            (Some(_), Some(_)) => {
                debug_assert!(false, "more than one unmatched card face-up");
                None
            }
        }
    }

    fn open_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_open()).count()
    }

    /// O(1) copy of the deck plus the current clock reading.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C> {
        GameSnapshot::new(self.cards.clone(), self.clock.now())
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.config.pair_count
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Every card matched. An empty deck is trivially finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of cards whose match came inside their bonus window.
    #[must_use]
    pub fn bonus_count(&self) -> usize {
        self.cards.iter().filter(|c| c.has_earned_bonus()).count()
    }

    /// Current reading of the game's clock, for the card bonus accessors.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    #[must_use]
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// RNG position, enough to reproduce the next shuffle or deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<C: Clone + fmt::Debug, K> fmt::Debug for MemoryGame<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryGame")
            .field("config", &self.config)
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

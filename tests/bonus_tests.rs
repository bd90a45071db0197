//! Bonus-time scoring tests.
//!
//! Time is driven by a `ManualClock`, so every reading is exact.

use std::time::Duration;

use memorize::{Card, CardId, GameConfig, ManualClock, MemoryGame, DEFAULT_BONUS_TIME_LIMIT};

type Game = MemoryGame<char, ManualClock>;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

fn game_with_limit(limit: Duration) -> (Game, ManualClock) {
    let clock = ManualClock::new();
    let game = MemoryGame::with_config(
        GameConfig::new(2).with_seed(5).with_bonus_time_limit(limit),
        |pair| ['A', 'B'][pair],
        clock.clone(),
    )
    .expect("valid config");
    (game, clock)
}

fn card(game: &Game, id: u32) -> &Card<char> {
    game.card(CardId::new(id)).expect("card exists")
}

// Ids 0 and 1 are the A pair, 2 and 3 the B pair.
const A0: CardId = CardId::new(0);
const A1: CardId = CardId::new(1);
const B0: CardId = CardId::new(2);

#[test]
fn test_default_limit() {
    let game = MemoryGame::new(1, |_| 'x');
    assert!(game
        .cards()
        .iter()
        .all(|c| c.bonus_time_limit() == DEFAULT_BONUS_TIME_LIMIT));
    assert_eq!(DEFAULT_BONUS_TIME_LIMIT, secs(6));
}

#[test]
fn test_match_before_limit_earns_bonus() {
    for elapsed in [0, 1, 5] {
        let (mut game, clock) = game_with_limit(secs(6));
        game.choose(A0);
        clock.advance(secs(elapsed));
        game.choose(A1);

        assert!(card(&game, 0).has_earned_bonus(), "elapsed {elapsed}s");
    }
}

#[test]
fn test_match_at_or_after_limit_earns_nothing() {
    for elapsed in [6, 7, 100] {
        let (mut game, clock) = game_with_limit(secs(6));
        game.choose(A0);
        clock.advance(secs(elapsed));
        game.choose(A1);

        assert!(card(&game, 0).is_matched());
        assert!(!card(&game, 0).has_earned_bonus(), "elapsed {elapsed}s");
    }
}

#[test]
fn test_second_pick_matches_instantly() {
    let (mut game, clock) = game_with_limit(secs(6));
    game.choose(A0);
    clock.advance(secs(10));
    game.choose(A1);

    // The second card never ran its clock
    assert_eq!(card(&game, 1).face_up_time(game.now()), Duration::ZERO);
    assert!(card(&game, 1).has_earned_bonus());
    assert_eq!(game.bonus_count(), 1);
}

#[test]
fn test_face_up_time_accumulates_across_stretches() {
    let (mut game, clock) = game_with_limit(secs(6));

    game.choose(A0);
    clock.advance(secs(4));
    game.choose(B0); // mismatch: A0 goes down with 4s banked

    assert_eq!(card(&game, 0).bonus().past_face_up_time(), secs(4));
    assert!(!card(&game, 0).bonus().is_running());

    clock.advance(secs(30)); // face-down time is free
    game.choose(A0); // mismatch again: B0 down, A0 up
    clock.advance(secs(3));
    game.choose(A1);

    assert_eq!(card(&game, 0).face_up_time(game.now()), secs(7));
    assert!(!card(&game, 0).has_earned_bonus());
}

#[test]
fn test_remaining_and_fraction_while_face_up() {
    let (mut game, clock) = game_with_limit(secs(8));
    game.choose(A0);
    clock.advance(secs(2));

    let now = game.now();
    let waiting = card(&game, 0);
    assert!(waiting.is_consuming_bonus_time(now));
    assert_eq!(waiting.bonus_time_remaining(now), secs(6));
    assert!((waiting.bonus_remaining(now) - 0.75).abs() < 1e-9);

    clock.advance(secs(10));
    let now = game.now();
    let waiting = card(&game, 0);
    assert_eq!(waiting.bonus_time_remaining(now), Duration::ZERO);
    assert_eq!(waiting.bonus_remaining(now), 0.0);
    assert!(!waiting.is_consuming_bonus_time(now));
}

#[test]
fn test_zero_limit_disables_bonus() {
    let clock = ManualClock::new();
    let mut game = MemoryGame::with_config(
        GameConfig::new(1).with_seed(1).without_bonus(),
        |_| 'A',
        clock.clone(),
    )
    .unwrap();

    game.choose(A0);
    game.choose(A1);

    assert!(card(&game, 0).is_matched());
    assert!(!card(&game, 0).has_earned_bonus());
    assert!(!card(&game, 1).has_earned_bonus());
    assert_eq!(card(&game, 0).bonus_remaining(game.now()), 0.0);
}

#[test]
fn test_snapshot_freezes_timer_reading() {
    let (mut game, clock) = game_with_limit(secs(6));
    game.choose(A0);
    clock.advance(secs(3));

    let snapshot = game.snapshot();
    clock.advance(secs(2));

    assert_eq!(snapshot.taken_at(), secs(3));
    let waiting = snapshot.card(A0).unwrap();
    assert_eq!(waiting.bonus_time_remaining(snapshot.taken_at()), secs(3));

    let fractions = snapshot.bonus_fractions();
    let index = snapshot.position(A0).unwrap();
    assert!((fractions[index] - 0.5).abs() < 1e-9);
}

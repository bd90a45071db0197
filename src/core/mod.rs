//! Core building blocks: RNG, clock, configuration, errors.
//!
//! Nothing here knows about cards. The game module composes these.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, DEFAULT_BONUS_TIME_LIMIT, MAX_PAIR_COUNT};
pub use error::GameError;
pub use rng::{GameRng, GameRngState};

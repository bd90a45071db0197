//! The game-state engine.
//!
//! - `MemoryGame`: owns the deck; `choose`, `shuffle`, `restart`
//! - `ChooseOutcome`: what a `choose` call did
//! - `GameSnapshot`: cheap read-only copy for renderers

mod engine;
mod outcome;
mod snapshot;

pub use engine::{ContentFactory, MemoryGame};
pub use outcome::ChooseOutcome;
pub use snapshot::GameSnapshot;

//! Cards and their bonus-time bookkeeping.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier, unique within a deck (`2i` / `2i + 1` for pair `i`)
//! - `Card`: Content plus face-up/matched flags
//! - `BonusTimer`: Face-up time accounting behind the bonus rule

pub mod bonus;
pub mod card;

pub use bonus::BonusTimer;
pub use card::{Card, CardId};

//! Emoji front-end collaborator.
//!
//! A concrete game built on the engine: themes supply the emojis, and
//! `EmojiMemoryGame` is what a UI binds its buttons and taps to.

mod theme;
mod view_model;

pub use theme::EmojiTheme;
pub use view_model::{EmojiMemoryGame, TOTAL_DEAL_DURATION};

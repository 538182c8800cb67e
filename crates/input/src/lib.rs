//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`] and keeps the
//! state of the placement prompt (characters typed so far and the board cursor)
//! and of the seed prompt shown before each game.

pub mod handler;
pub mod map;

pub use jospel_types as types;

pub use handler::{InputHandler, SeedInput, SeedText, MAX_SEED_TYPED};
pub use map::{handle_key_event, handle_seed_key_event, should_quit, should_quit_seed_entry};

//! Prompt state.
//!
//! [`InputHandler`] holds the characters typed so far and a board cursor. Submitting
//! parses the typed text as a location, or uses the cursor when nothing has been typed.
//! [`SeedInput`] collects the seed token asked for before each game.

use arrayvec::ArrayString;

use crate::types::{Direction, Location, LocationError, PlayerAction, BOARD_SIDE};

/// Longest typed input kept; longer input is still reported as malformed.
const MAX_TYPED: usize = 4;

/// Longest seed text kept. A `u64` seed never needs more than 13 characters.
pub const MAX_SEED_TYPED: usize = 24;

/// Seed text as submitted from [`SeedInput`].
pub type SeedText = ArrayString<MAX_SEED_TYPED>;

/// Tracks prompt input for one placement.
#[derive(Debug, Clone)]
pub struct InputHandler {
    typed: ArrayString<MAX_TYPED>,
    cursor: Location,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            typed: ArrayString::new(),
            cursor: Location { column: 0, row: 0 },
        }
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn cursor(&self) -> Location {
        self.cursor
    }

    /// Forget typed text; the cursor stays where it is.
    pub fn reset(&mut self) {
        self.typed.clear();
    }

    /// Apply a prompt action.
    ///
    /// Returns `Some` only for [`PlayerAction::Submit`], with the chosen location or
    /// the parse error for the typed text. Typed text is cleared on submit either way.
    /// `NewGame` and `Replay` are left to the caller.
    pub fn handle(&mut self, action: PlayerAction) -> Option<Result<Location, LocationError>> {
        match action {
            PlayerAction::Type(c) => {
                // Overflowing input is dropped; what was kept is already malformed.
                let _ = self.typed.try_push(c);
                None
            }
            PlayerAction::Erase => {
                self.typed.pop();
                None
            }
            PlayerAction::MoveCursor(direction) => {
                self.move_cursor(direction);
                None
            }
            PlayerAction::Submit => {
                let result = if self.typed.is_empty() {
                    Ok(self.cursor)
                } else {
                    self.typed.parse::<Location>()
                };
                if let Ok(location) = result {
                    self.cursor = location;
                }
                self.typed.clear();
                Some(result)
            }
            PlayerAction::NewGame | PlayerAction::Replay => None,
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let last = BOARD_SIDE - 1;
        let Location { column, row } = self.cursor;
        self.cursor = match direction {
            Direction::Up => Location { column, row: row.saturating_sub(1) },
            Direction::Down => Location { column, row: (row + 1).min(last) },
            Direction::Left => Location { column: column.saturating_sub(1), row },
            Direction::Right => Location { column: (column + 1).min(last), row },
        };
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed prompt input.
///
/// Characters past [`MAX_SEED_TYPED`] are dropped, so the prompt always shows
/// exactly what will be submitted.
#[derive(Debug, Clone, Default)]
pub struct SeedInput {
    typed: SeedText,
}

impl SeedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn reset(&mut self) {
        self.typed.clear();
    }

    /// Apply a prompt action; `Submit` hands back the typed text and clears it.
    ///
    /// An empty submission asks for a fresh shuffle. Cursor and command actions are ignored.
    pub fn handle(&mut self, action: PlayerAction) -> Option<SeedText> {
        match action {
            PlayerAction::Type(c) => {
                let _ = self.typed.try_push(c);
                None
            }
            PlayerAction::Erase => {
                self.typed.pop();
                None
            }
            PlayerAction::Submit => {
                let text = self.typed;
                self.typed.clear();
                Some(text)
            }
            PlayerAction::MoveCursor(_) | PlayerAction::NewGame | PlayerAction::Replay => None,
        }
    }
}

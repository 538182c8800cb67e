//! Error types for the game core.
//!
//! Every condition a player can trigger (bad seed, bad location, occupied cell)
//! is reported as a value so the caller decides whether to re-prompt.

use thiserror::Error;

use crate::types::{LocationError, DRAW_LEN};

/// A seed token that does not describe a playable draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("decoding seed {token:?} failed: {reason}")]
    Decode { token: String, reason: String },

    #[error(
        "seed is wrong length ({len} cards instead of {expected}), please make sure you copied it correctly",
        expected = DRAW_LEN
    )]
    Length { len: usize },
}

/// Rejected board placement. The board is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("position {0} is outside the board")]
    OutOfRange(usize),

    #[error("position {0} is already filled")]
    Occupied(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("no cards left to draw")]
    Exhausted,
}

/// Errors surfaced by [`crate::GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{operation} is not allowed while {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: &'static str,
    },

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Place(#[from] PlaceError),

    /// Drawing past the end of the deck. Turn counting makes this unreachable.
    #[error("internal consistency failure: {0}")]
    Deck(#[from] DeckError),
}

impl SessionError {
    /// True for conditions the player fixes by choosing another position.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SessionError::Location(_) | SessionError::Place(_))
    }
}

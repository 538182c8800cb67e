//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of Jospel: dealing cards, placing them on the 4x4 board,
//! and scoring the finished board. It has no dependencies on the terminal or on any
//! other I/O, so the same code drives the interactive game, headless runs and tests.
//!
//! # Module Structure
//!
//! - [`seed`]: base-36 seed tokens that record and replay a draw
//! - [`deck`]: the 20-card pool and the 16-card draw of one game
//! - [`board`]: 4x4 grid with single-assignment cells
//! - [`scoring`]: pattern detectors and per-line scoring
//! - [`session`]: the turn loop as a state machine
//! - [`report`]: final board, per-line results and total
//! - [`snapshot`]: plain copy of a session for rendering
//!
//! # Game Rules
//!
//! - Two copies of each card 1-10 make a pool of 20; a game deals 16 of them
//! - Each card is placed into an empty cell and stays there
//! - After 16 placements every row and column (optionally both diagonals) scores
//!   the best pattern it shows
//!
//! # Example
//!
//! ```
//! use jospel_core::{Deck, GameSession};
//! use jospel_core::types::LineSet;
//!
//! let mut session = GameSession::new(Deck::from_rng_seed(42), LineSet::Standard);
//! let report = session
//!     .play_with(|board, _card| board.first_empty().unwrap_or(0))
//!     .unwrap();
//!
//! assert!(session.board().is_full());
//! assert_eq!(report.lines.len(), 8);
//! ```

pub mod board;
pub mod deck;
pub mod error;
pub mod report;
pub mod scoring;
pub mod seed;
pub mod session;
pub mod snapshot;

pub use jospel_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use deck::{card_pool, Deck};
pub use error::{DeckError, PlaceError, SeedError, SessionError};
pub use report::FinalReport;
pub use scoring::{max_points_of_row, score_line, score_lines, LineResult, LineResults};
pub use seed::SeedToken;
pub use session::{GameSession, Phase};
pub use snapshot::SessionSnapshot;

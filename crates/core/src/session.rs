//! Game session module - runs one game from first draw to final report
//!
//! The session owns its board and deck and moves through four phases:
//!
//! ```text
//! AwaitingCardDraw --draw--> AwaitingPlacement --place ok--> TurnComplete
//!        ^                     |       ^                         |
//!        |                     +-------+ rejected (card kept)    |
//!        +---------------------- turns += 1 ---------------------+
//! AwaitingCardDraw --deck empty or turn cap--> GameOver
//! ```
//!
//! [`GameSession::advance`] performs the automatic transitions and stops where the
//! caller has to act: with a pending card, or at game over. Rejected placements leave
//! the pending card in place so the caller can supply another position.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::deck::Deck;
use crate::error::{SeedError, SessionError};
use crate::report::FinalReport;
use crate::scoring;
use crate::snapshot::SessionSnapshot;
use crate::types::{Card, LineSet, Location, MAX_TURNS};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingCardDraw,
    /// A card has been drawn and waits for a position
    AwaitingPlacement(Card),
    TurnComplete,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingCardDraw => "awaiting card draw",
            Phase::AwaitingPlacement(_) => "awaiting placement",
            Phase::TurnComplete => "turn complete",
            Phase::GameOver => "game over",
        }
    }
}

/// One game: board, deck, turn counter and phase
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    deck: Deck,
    line_set: LineSet,
    phase: Phase,
    turns: u8,
    forced_end: bool,
}

impl GameSession {
    pub fn new(deck: Deck, line_set: LineSet) -> Self {
        debug!(
            seed = %deck.seed(),
            line_set = line_set.as_str(),
            "new session"
        );
        Self {
            board: Board::new(),
            deck,
            line_set,
            phase: Phase::AwaitingCardDraw,
            turns: 0,
            forced_end: false,
        }
    }

    /// Start a game with a freshly shuffled deck.
    pub fn fresh(line_set: LineSet) -> Self {
        Self::new(Deck::fresh(), line_set)
    }

    /// Start a game replaying a seed token.
    pub fn from_seed(token: &str, line_set: LineSet) -> Result<Self, SeedError> {
        Deck::from_seed(token).map(|deck| Self::new(deck, line_set))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn line_set(&self) -> LineSet {
        self.line_set
    }

    pub fn turns_taken(&self) -> u8 {
        self.turns
    }

    pub fn pending_card(&self) -> Option<Card> {
        match self.phase {
            Phase::AwaitingPlacement(card) => Some(card),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Run automatic transitions until a placement is needed or the game is over.
    pub fn advance(&mut self) -> Result<Phase, SessionError> {
        loop {
            match self.phase {
                Phase::AwaitingCardDraw => self.draw_or_finish()?,
                Phase::TurnComplete => {
                    self.turns += 1;
                    self.phase = Phase::AwaitingCardDraw;
                }
                Phase::AwaitingPlacement(_) | Phase::GameOver => return Ok(self.phase),
            }
        }
    }

    fn draw_or_finish(&mut self) -> Result<(), SessionError> {
        if self.deck.is_empty() || self.turns >= MAX_TURNS {
            if !self.deck.is_empty() {
                self.forced_end = true;
                warn!(
                    turns = self.turns,
                    remaining = self.deck.remaining_count(),
                    "game has lasted too long, forcing end"
                );
            }
            self.phase = Phase::GameOver;
            info!(
                turns = self.turns,
                total = self.score_so_far(),
                "game over"
            );
            return Ok(());
        }

        let card = self.deck.draw_next()?;
        debug!(turn = self.turns + 1, %card, "card drawn");
        self.phase = Phase::AwaitingPlacement(card);
        Ok(())
    }

    /// Commit the pending card to `index`.
    ///
    /// On rejection the board is unchanged and the same card stays pending.
    pub fn place(&mut self, index: usize) -> Result<Card, SessionError> {
        let Phase::AwaitingPlacement(card) = self.phase else {
            return Err(SessionError::WrongPhase {
                operation: "placing a card",
                phase: self.phase.as_str(),
            });
        };

        if let Err(err) = self.board.place(index, card) {
            debug!(index, %card, error = %err, "placement rejected");
            return Err(err.into());
        }

        debug!(index, %card, "card placed");
        self.phase = Phase::TurnComplete;
        Ok(card)
    }

    pub fn place_at(&mut self, location: Location) -> Result<Card, SessionError> {
        self.place(location.index())
    }

    /// Parse a typed location (`"b3"`) and place the pending card there.
    pub fn place_str(&mut self, input: &str) -> Result<Card, SessionError> {
        let location: Location = input.parse()?;
        self.place_at(location)
    }

    /// Points from lines that are already complete
    pub fn score_so_far(&self) -> u32 {
        scoring::total_points(&scoring::score_lines(&self.board, self.line_set))
    }

    /// Final report, available once the game is over.
    pub fn report(&self) -> Option<FinalReport> {
        self.is_over().then(|| {
            FinalReport::build(
                &self.board,
                self.line_set,
                *self.deck.played_order(),
                self.turns,
                self.forced_end,
            )
        })
    }

    /// Play to the end, asking `choose` for a board index for every card.
    ///
    /// A rejected choice is returned as an error; the session keeps the pending card.
    pub fn play_with<F>(&mut self, mut choose: F) -> Result<FinalReport, SessionError>
    where
        F: FnMut(&Board, Card) -> usize,
    {
        loop {
            match self.advance()? {
                Phase::AwaitingPlacement(card) => {
                    let index = choose(&self.board, card);
                    self.place(index)?;
                }
                _ => break,
            }
        }
        self.report().ok_or(SessionError::WrongPhase {
            operation: "building the report",
            phase: self.phase.as_str(),
        })
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.phase = self.phase;
        out.pending = self.pending_card();
        out.turns = self.turns;
        out.remaining = self.deck.remaining_count() as u8;
        out.running_total = self.score_so_far();
        out.seed = self.deck.seed();
        out.seed_replayable = self.deck.seed_replayable();
        out.line_set = self.line_set;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

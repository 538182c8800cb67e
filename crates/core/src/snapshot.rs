use crate::seed::SeedToken;
use crate::session::Phase;
use crate::types::{Card, LineSet, BOARD_CELLS};

/// Plain copy of everything a view needs to draw a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    /// Card values, 0 for empty
    pub board: [u8; BOARD_CELLS],
    pub phase: Phase,
    pub pending: Option<Card>,
    pub turns: u8,
    pub remaining: u8,
    /// Points from lines that are already complete
    pub running_total: u32,
    pub seed: SeedToken,
    pub seed_replayable: bool,
    pub line_set: LineSet,
}

impl SessionSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn cell(&self, index: usize) -> Option<Card> {
        self.board.get(index).and_then(|&v| Card::new(v))
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [0u8; BOARD_CELLS],
            phase: Phase::AwaitingCardDraw,
            pending: None,
            turns: 0,
            remaining: 0,
            running_total: 0,
            seed: SeedToken::new(),
            seed_replayable: true,
            line_set: LineSet::Standard,
        }
    }
}

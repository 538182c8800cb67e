//! Final report - what a finished game hands to its renderer.

use crate::board::Board;
use crate::scoring::{self, LineResult, LineResults};
use crate::seed::SeedToken;
use crate::types::{Card, LineKind, LineSet, DRAW_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub board: Board,
    /// Rows, columns, then diagonals when scored
    pub lines: LineResults,
    pub total: u32,
    /// The draw as recorded (seed order)
    pub played_order: [Card; DRAW_LEN],
    pub seed: SeedToken,
    pub seed_replayable: bool,
    pub turns: u8,
    pub line_set: LineSet,
    /// The turn cap ended the game with cards still in the deck
    pub forced_end: bool,
}

impl FinalReport {
    /// Score `board` and collect the report fields.
    pub fn build(
        board: &Board,
        line_set: LineSet,
        played_order: [Card; DRAW_LEN],
        turns: u8,
        forced_end: bool,
    ) -> Self {
        let lines = scoring::score_lines(board, line_set);
        let total = scoring::total_points(&lines);
        Self {
            board: board.clone(),
            lines,
            total,
            played_order,
            seed: crate::seed::encode(&played_order),
            seed_replayable: crate::seed::is_replayable(&played_order),
            turns,
            line_set,
            forced_end,
        }
    }

    /// Cards in the order they were dealt
    pub fn dealt_order(&self) -> impl Iterator<Item = Card> + '_ {
        self.played_order.iter().rev().copied()
    }

    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &LineResult> + '_ {
        self.lines.iter().filter(move |r| r.line.kind == kind)
    }

    pub fn matched_lines(&self) -> impl Iterator<Item = &LineResult> + '_ {
        self.lines.iter().filter(|r| r.result.is_match())
    }
}

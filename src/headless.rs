//! Headless runs: play one game from a fixed placement strategy.

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::core::{FinalReport, GameSession, Phase};
use crate::types::Location;

/// Where a headless game puts each card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Try these positions in order; rejected positions are skipped
    Moves(Vec<Location>),
    /// First empty cell in row-major order
    FillFirstEmpty,
}

/// Play `session` to the end.
///
/// Fails when a move list runs out before the board is full.
pub fn run_headless(session: &mut GameSession, strategy: &Strategy) -> Result<FinalReport> {
    let planned: &[Location] = match strategy {
        Strategy::Moves(moves) => moves,
        Strategy::FillFirstEmpty => &[],
    };
    let mut moves = planned.iter();

    while let Phase::AwaitingPlacement(card) = session.advance()? {
        let index = match strategy {
            Strategy::FillFirstEmpty => match session.board().first_empty() {
                Some(index) => index,
                None => bail!("no empty cell for card {card}"),
            },
            Strategy::Moves(_) => match moves.next() {
                Some(location) => location.index(),
                None => bail!(
                    "ran out of moves after {} placements",
                    session.turns_taken()
                ),
            },
        };

        match session.place(index) {
            Ok(_) => {}
            Err(err) if err.is_retryable() => {
                warn!(index, %card, error = %err, "skipping rejected move");
            }
            Err(err) => return Err(err.into()),
        }
    }

    match session.report() {
        Some(report) => {
            info!(
                seed = %report.seed,
                total = report.total,
                "headless game finished"
            );
            Ok(report)
        }
        None => bail!("game ended without a report"),
    }
}

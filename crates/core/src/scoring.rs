//! Scoring module - pattern detection on a single 4-value line
//!
//! Five detectors run independently on every line and each reports a
//! [`PatternMatch`]. A line scores at most one pattern: the best one, except that a
//! pair together with a short streak always scores the combined `pair + streak` (40).
//!
//! Lines are order-sensitive: `[3, 4, 5, 9]` has a streak, `[3, 9, 5, 4]` does not.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Line, LineSet, PatternKind, PatternMatch, LINE_LEN, MAX_LINES};

/// Ordered values of one line
pub type Row = [u8; LINE_LEN];

/// A detector inspects one row and reports its pattern or `NoMatch`.
pub type Detector = fn(&Row) -> PatternMatch;

/// Every detector, cheapest pattern first.
pub const DETECTORS: [Detector; 5] = [
    detect_pair,
    detect_double_pair,
    detect_short_streak,
    detect_long_streak,
    detect_jospel,
];

fn matched(hit: bool, kind: PatternKind) -> PatternMatch {
    if hit {
        PatternMatch::of(kind)
    } else {
        PatternMatch::NoMatch
    }
}

/// Consecutive values differ by exactly +1 throughout, or by -1 throughout.
fn is_step_run(values: &[u8]) -> bool {
    let diff = |w: &[u8]| i16::from(w[1]) - i16::from(w[0]);
    match values.windows(2).next().map(diff) {
        Some(step @ (1 | -1)) => values.windows(2).all(|w| diff(w) == step),
        _ => false,
    }
}

/// Two adjacent equal values, e.g. `[2, 3, 3, 8]`.
pub fn detect_pair(row: &Row) -> PatternMatch {
    matched(row.windows(2).any(|w| w[0] == w[1]), PatternKind::Pair)
}

/// `aabb` or `abab`, e.g. `[4, 4, 9, 9]` and `[3, 7, 3, 7]`.
pub fn detect_double_pair(row: &Row) -> PatternMatch {
    let hit = (row[0] == row[1] && row[2] == row[3]) || (row[0] == row[2] && row[1] == row[3]);
    matched(hit, PatternKind::DoublePair)
}

/// Three consecutive values at positions 0-2 or 1-3, e.g. `[7, 3, 4, 5]`.
pub fn detect_short_streak(row: &Row) -> PatternMatch {
    matched(row.windows(3).any(is_step_run), PatternKind::ShortStreak)
}

/// All four values consecutive, e.g. `[9, 8, 7, 6]`.
pub fn detect_long_streak(row: &Row) -> PatternMatch {
    matched(is_step_run(row), PatternKind::LongStreak)
}

/// Nothing but 1s and 10s, e.g. `[1, 10, 1, 10]`.
pub fn detect_jospel(row: &Row) -> PatternMatch {
    matched(row.iter().all(|&v| v == 1 || v == 10), PatternKind::Jospel)
}

/// Best result for one row.
///
/// # Examples
///
/// ```
/// use jospel_core::scoring::max_points_of_row;
/// use jospel_core::types::{PatternKind, PatternMatch};
///
/// assert_eq!(max_points_of_row(&[2, 3, 4, 4]), PatternMatch::of(PatternKind::PairStreak));
/// assert_eq!(max_points_of_row(&[1, 5, 9, 2]), PatternMatch::NoMatch);
/// ```
pub fn max_points_of_row(row: &Row) -> PatternMatch {
    let found: [PatternMatch; 5] = DETECTORS.map(|detect| detect(row));

    let has = |kind: PatternKind| found.iter().any(|m| m.kind() == Some(kind));
    if has(PatternKind::Pair) && has(PatternKind::ShortStreak) {
        return PatternMatch::of(PatternKind::PairStreak);
    }

    found
        .into_iter()
        .filter(PatternMatch::is_match)
        .max_by_key(PatternMatch::points)
        .unwrap_or(PatternMatch::NoMatch)
}

/// Score one line of `board`. Lines with an empty cell never match.
pub fn score_line(board: &Board, line: &Line) -> PatternMatch {
    board
        .line_values(line)
        .map_or(PatternMatch::NoMatch, |row| max_points_of_row(&row))
}

/// One scored line of the final board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineResult {
    pub line: Line,
    pub result: PatternMatch,
}

/// Per-line results in report order (rows, columns, then diagonals)
pub type LineResults = ArrayVec<LineResult, MAX_LINES>;

/// Score every line of `line_set`.
pub fn score_lines(board: &Board, line_set: LineSet) -> LineResults {
    line_set
        .lines()
        .iter()
        .map(|line| LineResult {
            line: *line,
            result: score_line(board, line),
        })
        .collect()
}

pub fn total_points(results: &[LineResult]) -> u32 {
    results.iter().map(|r| r.result.points()).sum()
}

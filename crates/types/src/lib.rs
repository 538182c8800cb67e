//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, JSON reports).
//!
//! # Board Layout
//!
//! The board is a 4x4 grid addressed by a single index in row-major order:
//!
//! ```text
//!      A   B   C   D
//!  1   0   1   2   3
//!  2   4   5   6   7
//!  3   8   9  10  11
//!  4  12  13  14  15
//! ```
//!
//! Players name cells with a column letter followed by a row digit (`B3` is index 9).
//!
//! # Pattern Points
//!
//! | Pattern | Points | Rule |
//! |---------|--------|------|
//! | Pair | 10 | two adjacent equal values |
//! | Double pair | 20 | `aabb` or `abab` |
//! | Short streak | 30 | three consecutive values in a row, up or down |
//! | Long streak | 40 | four consecutive values, up or down |
//! | Jospel | 50 | only 1s and 10s |
//! | Pair + streak | 40 | a pair and a short streak on the same line |
//!
//! # Examples
//!
//! ```
//! use jospel_types::{Card, Location, LineSet, PatternKind, BOARD_CELLS};
//!
//! let loc: Location = "b3".parse().unwrap();
//! assert_eq!(loc.index(), 9);
//! assert_eq!(loc.to_string(), "B3");
//!
//! let ten = Card::new(10).unwrap();
//! assert_eq!(ten.digit(), 0);
//!
//! assert_eq!(LineSet::Standard.lines().len(), 8);
//! assert_eq!(LineSet::WithDiagonals.lines().len(), 10);
//! assert_eq!(PatternKind::Jospel.points(), 50);
//! assert_eq!(BOARD_CELLS, 16);
//! ```

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Board side length (4 rows, 4 columns)
pub const BOARD_SIDE: u8 = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Number of cards dealt per game
pub const DRAW_LEN: usize = 16;

/// Hard cap on turns per game
pub const MAX_TURNS: u8 = 16;

/// Lowest card value
pub const MIN_CARD: u8 = 1;

/// Highest card value
pub const MAX_CARD: u8 = 10;

/// Copies of each value in the pool
pub const COPIES_PER_VALUE: usize = 2;

/// Size of the card pool a draw is sampled from (two of each value)
pub const POOL_SIZE: usize = (MAX_CARD as usize) * COPIES_PER_VALUE;

/// Cells per scoring line
pub const LINE_LEN: usize = 4;

/// Rows, columns and both long diagonals
pub const MAX_LINES: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_and_pool_dimensions() {
        assert_eq!(BOARD_CELLS, 16);
        assert_eq!(DRAW_LEN, BOARD_CELLS);
        assert_eq!(POOL_SIZE, 20);
        assert_eq!(MAX_TURNS as usize, DRAW_LEN);
    }

    #[test]
    fn card_digit_mapping() {
        assert_eq!(Card::new(0), None);
        assert_eq!(Card::new(11), None);
        assert_eq!(Card::new(10).map(Card::digit), Some(0));
        assert_eq!(Card::new(7).map(Card::digit), Some(7));
        assert_eq!(Card::from_digit(0), Card::new(10));
        assert_eq!(Card::from_digit(3), Card::new(3));
        assert_eq!(Card::from_digit(10), None);
    }

    #[test]
    fn location_parsing_matches_column_row_notation() {
        assert_eq!("A1".parse::<Location>().map(|l| l.index()), Ok(0));
        assert_eq!("D1".parse::<Location>().map(|l| l.index()), Ok(3));
        assert_eq!("B3".parse::<Location>().map(|l| l.index()), Ok(9));
        assert_eq!("d4".parse::<Location>().map(|l| l.index()), Ok(15));
        assert_eq!(" c2 ".parse::<Location>().map(|l| l.index()), Ok(6));
    }

    #[test]
    fn location_parsing_rejects_bad_tokens() {
        assert_eq!(
            "E1".parse::<Location>(),
            Err(LocationError::UnknownColumn('E'))
        );
        assert_eq!("A5".parse::<Location>(), Err(LocationError::RowOutOfRange('5')));
        assert_eq!("A0".parse::<Location>(), Err(LocationError::RowOutOfRange('0')));
        assert_eq!("Ax".parse::<Location>(), Err(LocationError::RowOutOfRange('x')));
        assert!(matches!(
            "".parse::<Location>(),
            Err(LocationError::Malformed(_))
        ));
        assert!(matches!(
            "A12".parse::<Location>(),
            Err(LocationError::Malformed(_))
        ));
    }

    #[test]
    fn location_index_roundtrip_covers_board() {
        for index in 0..BOARD_CELLS {
            let loc = Location::from_index(index).unwrap();
            assert_eq!(loc.index(), index);
            assert_eq!(loc.to_string().parse::<Location>(), Ok(loc));
        }
        assert_eq!(Location::from_index(BOARD_CELLS), None);
    }

    #[test]
    fn line_definitions_follow_traversal_order() {
        let lines = LineSet::WithDiagonals.lines();
        assert_eq!(lines[0].cells, [0, 1, 2, 3]);
        assert_eq!(lines[3].cells, [12, 13, 14, 15]);
        assert_eq!(lines[4].cells, [0, 4, 8, 12]);
        assert_eq!(lines[7].cells, [3, 7, 11, 15]);
        assert_eq!(lines[8].cells, [0, 5, 10, 15]);
        assert_eq!(lines[9].cells, [3, 6, 9, 12]);
        assert_eq!(lines[4].label(), "A");
        assert_eq!(lines[2].label(), "3");
    }

    #[test]
    fn pattern_points_are_distinct_except_pair_streak() {
        assert_eq!(PatternKind::Pair.points(), 10);
        assert_eq!(PatternKind::DoublePair.points(), 20);
        assert_eq!(PatternKind::ShortStreak.points(), 30);
        assert_eq!(PatternKind::LongStreak.points(), 40);
        assert_eq!(PatternKind::Jospel.points(), 50);
        assert_eq!(PatternKind::PairStreak.points(), 40);
        assert_eq!(PatternMatch::NoMatch.points(), 0);
    }
}

/// A single card value in `1..=10`
///
/// Cards are compared by value; two copies of the same value are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Create a card, returning `None` outside `1..=10`
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN_CARD && value <= MAX_CARD {
            Some(Card(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Single decimal digit used by the seed codec (10 maps to `0`)
    pub const fn digit(self) -> u8 {
        if self.0 == 10 {
            0
        } else {
            self.0
        }
    }

    /// Inverse of [`Card::digit`]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Card(10)),
            1..=9 => Some(Card(digit)),
            _ => None,
        }
    }

    /// Every card value in ascending order
    pub fn all() -> impl Iterator<Item = Card> {
        (MIN_CARD..=MAX_CARD).map(Card)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Card)`: Cell holding a placed card
pub type Cell = Option<Card>;

/// A board position in column-row notation (`A1` top-left, `D4` bottom-right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Column offset, 0 for `A` through 3 for `D`
    pub column: u8,
    /// Row offset, 0 for `1` through 3 for `4`
    pub row: u8,
}

impl Location {
    /// Flat board index (`column + row * 4`)
    pub fn index(&self) -> usize {
        self.column as usize + (self.row as usize) * (BOARD_SIDE as usize)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_CELLS {
            return None;
        }
        let side = BOARD_SIDE as usize;
        Some(Self {
            column: (index % side) as u8,
            row: (index / side) as u8,
        })
    }

    pub fn column_letter(&self) -> char {
        (b'A' + self.column) as char
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row + 1)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (col_ch, row_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => (c, r),
            _ => return Err(LocationError::Malformed(trimmed.to_string())),
        };

        let column = match col_ch.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            'D' => 3,
            other => return Err(LocationError::UnknownColumn(other)),
        };
        let row = match row_ch {
            '1'..='4' => row_ch as u8 - b'1',
            _ => return Err(LocationError::RowOutOfRange(row_ch)),
        };

        Ok(Self { column, row })
    }
}

/// Why a typed location could not be mapped onto the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Not exactly two characters
    Malformed(String),
    UnknownColumn(char),
    RowOutOfRange(char),
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Malformed(s) => {
                write!(f, "invalid position {s:?}, expected a column A-D and a row 1-4")
            }
            LocationError::UnknownColumn(c) => write!(f, "unknown column {c:?}, expected A-D"),
            LocationError::RowOutOfRange(r) => write!(f, "row {r:?} out of range, expected 1-4"),
        }
    }
}

impl Error for LocationError {}

/// Which kind of board line a scoring unit is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Row => "row",
            LineKind::Column => "column",
            LineKind::Diagonal => "diagonal",
            LineKind::AntiDiagonal => "anti_diagonal",
        }
    }
}

/// A fixed 4-cell scoring unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub kind: LineKind,
    /// Row or column offset; 0 for diagonals
    pub ordinal: u8,
    /// Board indices in traversal order
    pub cells: [usize; LINE_LEN],
}

impl Line {
    const fn row(r: usize) -> Self {
        Self {
            kind: LineKind::Row,
            ordinal: r as u8,
            cells: [r * 4, r * 4 + 1, r * 4 + 2, r * 4 + 3],
        }
    }

    const fn column(c: usize) -> Self {
        Self {
            kind: LineKind::Column,
            ordinal: c as u8,
            cells: [c, c + 4, c + 8, c + 12],
        }
    }

    /// Short label as drawn next to the board: `1`-`4`, `A`-`D`, `\` or `/`
    pub fn label(&self) -> &'static str {
        const ROWS: [&str; 4] = ["1", "2", "3", "4"];
        const COLUMNS: [&str; 4] = ["A", "B", "C", "D"];
        match self.kind {
            LineKind::Row => ROWS[self.ordinal as usize % 4],
            LineKind::Column => COLUMNS[self.ordinal as usize % 4],
            LineKind::Diagonal => "\\",
            LineKind::AntiDiagonal => "/",
        }
    }
}

/// All lines in report order: rows, columns, then the two long diagonals
pub const LINES: [Line; MAX_LINES] = [
    Line::row(0),
    Line::row(1),
    Line::row(2),
    Line::row(3),
    Line::column(0),
    Line::column(1),
    Line::column(2),
    Line::column(3),
    Line {
        kind: LineKind::Diagonal,
        ordinal: 0,
        cells: [0, 5, 10, 15],
    },
    Line {
        kind: LineKind::AntiDiagonal,
        ordinal: 0,
        cells: [3, 6, 9, 12],
    },
];

/// Which lines are scored at game end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineSet {
    /// 4 rows and 4 columns
    #[default]
    Standard,
    /// Rows, columns and both long diagonals
    WithDiagonals,
}

impl LineSet {
    pub fn lines(&self) -> &'static [Line] {
        match self {
            LineSet::Standard => &LINES[..8],
            LineSet::WithDiagonals => &LINES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineSet::Standard => "standard",
            LineSet::WithDiagonals => "diagonals",
        }
    }
}

/// The scoring patterns a line can match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Pair,
    DoublePair,
    ShortStreak,
    LongStreak,
    Jospel,
    /// Pair and short streak on the same line, the only combined result
    PairStreak,
}

impl PatternKind {
    pub fn points(&self) -> u32 {
        match self {
            PatternKind::Pair => 10,
            PatternKind::DoublePair => 20,
            PatternKind::ShortStreak => 30,
            PatternKind::LongStreak => 40,
            PatternKind::Jospel => 50,
            PatternKind::PairStreak => 40,
        }
    }

    /// Display name as shown to players
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Pair => "pair",
            PatternKind::DoublePair => "double pair",
            PatternKind::ShortStreak => "short streak",
            PatternKind::LongStreak => "long streak",
            PatternKind::Jospel => "Jospel",
            PatternKind::PairStreak => "pair + streak",
        }
    }

    /// snake_case identifier for machine-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Pair => "pair",
            PatternKind::DoublePair => "double_pair",
            PatternKind::ShortStreak => "short_streak",
            PatternKind::LongStreak => "long_streak",
            PatternKind::Jospel => "jospel",
            PatternKind::PairStreak => "pair_streak",
        }
    }
}

/// Outcome of evaluating one detector (or the whole scorer) on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternMatch {
    #[default]
    NoMatch,
    Pattern { kind: PatternKind, points: u32 },
}

impl PatternMatch {
    pub fn of(kind: PatternKind) -> Self {
        PatternMatch::Pattern {
            kind,
            points: kind.points(),
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            PatternMatch::NoMatch => 0,
            PatternMatch::Pattern { points, .. } => *points,
        }
    }

    pub fn kind(&self) -> Option<PatternKind> {
        match self {
            PatternMatch::NoMatch => None,
            PatternMatch::Pattern { kind, .. } => Some(*kind),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, PatternMatch::Pattern { .. })
    }
}

/// Cursor movement on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Actions a player can take at the placement and seed prompts
///
/// Position and seed characters are typed one at a time and submitted with `Submit`;
/// the cursor offers a second way to pick a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// A character of a typed position such as `B3`, or of a seed token
    Type(char),
    /// Remove the last typed character
    Erase,
    MoveCursor(Direction),
    /// Place at the typed position, or at the cursor when nothing is typed
    Submit,
    /// Abandon the current game and ask for the next game's seed
    NewGame,
    /// Replay the finished game's seed
    Replay,
}

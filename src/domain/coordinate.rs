use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIDE: usize = 8;

/// A cell of the 8x8 board in array convention: row 0 is black's back rank,
/// row 7 is white's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the square shifted by `(dr, dc)`, or `None` when it falls off the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || row >= BOARD_SIDE as isize || col < 0 || col >= BOARD_SIDE as isize {
            return None;
        }
        Some(Square::new(row as usize, col as usize))
    }

    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIDE && self.col < BOARD_SIDE
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIDE).flat_map(|row| (0..BOARD_SIDE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

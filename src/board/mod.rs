//! Board representation for Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use crate::error::ParseError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    White,
    Black,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::White => Stone::Black,
            Stone::Black => Stone::White,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::White => write!(f, "white"),
            Stone::Black => write!(f, "black"),
        }
    }
}

impl std::str::FromStr for Stone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Stone::White),
            "black" | "b" => Ok(Stone::Black),
            other => Err(ParseError::UnknownStone(other.to_string())),
        }
    }
}

/// Position on the board.
///
/// Coordinates are signed so that off-board positions can be represented
/// and rejected; use [`Pos::is_valid`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Center cell, where the first stone of a game goes
    #[inline]
    pub const fn center() -> Self {
        let c = (BOARD_SIZE / 2) as i32;
        Self { row: c, col: c }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Flat index, or `None` when off the board
    #[inline]
    pub fn to_index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.row as usize * BOARD_SIZE + self.col as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as i32,
            col: (idx % BOARD_SIZE) as i32,
        }
    }

    /// Step `n` cells along direction `(dr, dc)`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, n: i32) -> Self {
        Self {
            row: self.row + dr * n,
            col: self.col + dc * n,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

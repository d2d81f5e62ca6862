//! Immutable board value

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::InvalidMove;

/// Game board.
///
/// A `Board` is a self-contained snapshot: it is `Copy`, and placing a stone
/// returns a new value while the original stays untouched. Search code can
/// therefore branch freely without make/unmake bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// White stones bitboard
    white: Bitboard,
    /// Black stones bitboard
    black: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            white: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    /// Rebuild a position by playing `moves` in order, alternating colors
    /// starting with `first`.
    pub fn replay(moves: &[Pos], first: Stone) -> Result<Self, InvalidMove> {
        let mut board = Board::new();
        let mut color = first;
        for &pos in moves {
            board = board.place(pos, color)?;
            color = color.opponent();
        }
        Ok(board)
    }

    /// Get stone at position (`None` for empty or off-board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.white.get(pos) {
            Some(Stone::White)
        } else if self.black.get(pos) {
            Some(Stone::Black)
        } else {
            None
        }
    }

    /// Check if an on-board position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.is_valid() && !self.white.get(pos) && !self.black.get(pos)
    }

    /// Return a new board with `stone` at `pos`.
    ///
    /// Fails without touching `self` when `pos` is off the board or already
    /// occupied.
    pub fn place(&self, pos: Pos, stone: Stone) -> Result<Board, InvalidMove> {
        if !pos.is_valid() {
            return Err(InvalidMove::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.is_empty(pos) {
            return Err(InvalidMove::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let mut next = *self;
        match stone {
            Stone::White => next.white.set(pos),
            Stone::Black => next.black.set(pos),
        }
        Ok(next)
    }

    /// Get bitboard for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::White => &self.white,
            Stone::Black => &self.black,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white.union(&self.black)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.white.count() + self.black.count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE as i32 {
            write!(f, "{:>3}", row)?;
            for col in 0..BOARD_SIZE as i32 {
                let c = match self.get(Pos::new(row, col)) {
                    Some(Stone::White) => 'O',
                    Some(Stone::Black) => 'X',
                    None => '.',
                };
                write!(f, "{:>3}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

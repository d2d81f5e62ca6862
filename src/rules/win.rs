//! Win condition checking
//!
//! Five or more stones of one color in a row (horizontal, vertical or either
//! diagonal) wins. Overlines count.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions).
/// Scanning forward from every stone covers the reverse directions too.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// A completed five: the winning color and the five cells of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinResult {
    pub winner: Stone,
    /// Cells in scan order, starting at the stone the scan began from.
    pub line: [Pos; WIN_LENGTH],
}

/// Check for a winner.
///
/// Stones are visited in row-major order and each is tried as the start of
/// a run in every direction of [`DIRECTIONS`]. The first run reaching five
/// decides the result, so when several fives coexist the choice is
/// deterministic.
pub fn check_winner(board: &Board) -> Option<WinResult> {
    for pos in board.occupied().iter_ones() {
        let Some(stone) = board.get(pos) else {
            continue;
        };

        for &(dr, dc) in &DIRECTIONS {
            let mut line = [pos; WIN_LENGTH];
            let mut len = 1;

            while len < WIN_LENGTH {
                let next = pos.offset(dr, dc, len as i32);
                if board.get(next) != Some(stone) {
                    break;
                }
                line[len] = next;
                len += 1;
            }

            if len == WIN_LENGTH {
                return Some(WinResult { winner: stone, line });
            }
        }
    }
    None
}

/// Check if every cell holds a stone
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

//! Engine boundary used by the surrounding application
//!
//! The free functions here are the whole contract a front end needs: create
//! a board, place stones, ask for a winner, and ask the AI for a move.
//! [`AIEngine`] wraps the searcher for callers that want timing and node
//! statistics along with the move.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let engine = AIEngine::new(Difficulty::Easy);
//! let board = Board::new().place(Pos::new(7, 7), Stone::White).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Stone::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::error::InvalidMove;
use crate::rules::WinResult;
use crate::search::{Difficulty, SearchParams, Searcher};

/// Empty 15x15 board
#[inline]
pub fn create_board() -> Board {
    Board::new()
}

/// New board with `stone` at `position`, or why it could not be placed
#[inline]
pub fn place_stone(board: &Board, position: Pos, stone: Stone) -> Result<Board, InvalidMove> {
    board.place(position, stone)
}

#[inline]
pub fn check_winner(board: &Board) -> Option<WinResult> {
    crate::rules::check_winner(board)
}

#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

#[inline]
pub fn is_valid_position(position: Pos) -> bool {
    position.is_valid()
}

/// Cells the search would consider, before ordering
#[inline]
pub fn get_candidates(board: &Board) -> Vec<Pos> {
    crate::search::get_candidates(board)
}

/// The AI's move for `ai_stone`, or `None` when the board has no empty cell
pub fn get_best_move(board: &Board, ai_stone: Stone, difficulty: Difficulty) -> Option<Pos> {
    AIEngine::new(difficulty).get_move(board, ai_stone)
}

/// Like [`get_best_move`], but takes the difficulty by name. Names that are
/// not a known difficulty search with [`SearchParams::FALLBACK`].
pub fn get_best_move_by_name(board: &Board, ai_stone: Stone, difficulty: &str) -> Option<Pos> {
    AIEngine::from_difficulty_name(difficulty).get_move(board, ai_stone)
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// AI player with fixed search parameters.
///
/// The engine is stateless between calls; the same engine may be used for
/// either color and for unrelated boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIEngine {
    params: SearchParams,
}

impl AIEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            params: difficulty.params(),
        }
    }

    /// Engine for a difficulty given by name; never fails.
    pub fn from_difficulty_name(name: &str) -> Self {
        Self {
            params: Difficulty::params_for_name(name),
        }
    }

    /// Engine with explicit depth and candidate cap (each clamped to >= 1)
    pub fn with_config(depth: u8, candidate_cap: usize) -> Self {
        Self {
            params: SearchParams::new(depth, candidate_cap),
        }
    }

    #[inline]
    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn get_move(&self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    pub fn get_move_with_stats(&self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let result = Searcher::new(self.params).search(board, color);
        let time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            color = %color,
            depth = self.params.depth,
            cap = self.params.candidate_cap,
            nodes = result.nodes,
            score = result.score,
            time_ms,
            "search finished: {:?}",
            result.best_move
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn board_with(stones: &[(i32, i32, Stone)]) -> Board {
        stones.iter().fold(create_board(), |board, &(r, c, s)| {
            place_stone(&board, Pos::new(r, c), s).unwrap()
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new(Difficulty::Hard);
        assert_eq!(engine.params(), Difficulty::Hard.params());
        assert_eq!(AIEngine::default().params(), Difficulty::Medium.params());
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(0, 0);
        assert_eq!(engine.params(), SearchParams { depth: 1, candidate_cap: 1 });
    }

    #[test]
    fn test_engine_empty_board() {
        let board = create_board();
        let mov = get_best_move(&board, Stone::White, Difficulty::Easy).unwrap();
        assert!(is_valid_position(mov));
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = create_board();
        let mut color = Stone::White;
        for idx in 0..TOTAL_CELLS {
            board = place_stone(&board, Pos::from_index(idx), color).unwrap();
            color = color.opponent();
        }
        assert!(is_board_full(&board));
        assert_eq!(get_best_move(&board, Stone::White, Difficulty::Hard), None);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board = board_with(&[
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (7, 8, Stone::White),
            (0, 0, Stone::Black),
        ]);
        let mov = get_best_move(&board, Stone::White, Difficulty::Medium).unwrap();
        let after = place_stone(&board, mov, Stone::White).unwrap();
        assert_eq!(check_winner(&after).map(|w| w.winner), Some(Stone::White));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = board_with(&[
            (7, 4, Stone::White),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
        ]);
        for difficulty in Difficulty::ALL {
            assert_eq!(get_best_move(&board, Stone::White, difficulty), Some(Pos::new(7, 9)));
        }
    }

    #[test]
    fn test_engine_blocks_vertical_and_diagonal_fours() {
        // Vertical four capped at the top, open below
        let vertical = board_with(&[
            (2, 6, Stone::White),
            (3, 6, Stone::Black),
            (4, 6, Stone::Black),
            (5, 6, Stone::Black),
            (6, 6, Stone::Black),
        ]);
        // Diagonal four capped at the upper-left end, open at (7, 8)
        let diagonal = board_with(&[
            (2, 3, Stone::White),
            (3, 4, Stone::Black),
            (4, 5, Stone::Black),
            (5, 6, Stone::Black),
            (6, 7, Stone::Black),
        ]);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                get_best_move(&vertical, Stone::White, difficulty),
                Some(Pos::new(7, 6)),
                "{difficulty}"
            );
            assert_eq!(
                get_best_move(&diagonal, Stone::White, difficulty),
                Some(Pos::new(7, 8)),
                "{difficulty}"
            );
        }
    }

    #[test]
    fn test_engine_from_unknown_name_uses_fallback() {
        let engine = AIEngine::from_difficulty_name("nightmare");
        assert_eq!(engine.params(), SearchParams::FALLBACK);
        assert_eq!(AIEngine::from_difficulty_name("Easy").params(), Difficulty::Easy.params());
    }

    #[test]
    fn test_best_move_by_unknown_name_still_plays() {
        let board = board_with(&[
            (7, 4, Stone::White),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
        ]);
        assert_eq!(get_best_move_by_name(&board, Stone::White, "nightmare"), Some(Pos::new(7, 9)));
        assert_eq!(get_best_move_by_name(&create_board(), Stone::White, ""), Some(Pos::center()));
    }

    #[test]
    fn test_move_result_stats() {
        let board = board_with(&[(7, 7, Stone::White)]);
        let result = AIEngine::new(Difficulty::Easy).get_move_with_stats(&board, Stone::Black);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_get_candidates_boundary() {
        assert_eq!(get_candidates(&create_board()), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let engine = AIEngine::new(Difficulty::Easy);
        let mut board = create_board();
        let mut color = Stone::White;
        for _ in 0..6 {
            let mov = engine.get_move(&board, color).unwrap();
            board = place_stone(&board, mov, color).unwrap();
            color = color.opponent();
        }
        assert_eq!(board.stone_count(), 6);
    }
}

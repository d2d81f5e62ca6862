//! Depth-limited minimax with alpha-beta pruning
//!
//! The searcher plays from a fixed perspective (`ai_stone` maximizes, the
//! opponent minimizes). Every node works on its own [`Board`] value, so
//! there is no make/unmake: a child is simply `board.place(..)`.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{Difficulty, Searcher};
//!
//! let board = Board::new().place(Pos::new(7, 7), Stone::White).unwrap();
//! let mut searcher = Searcher::new(Difficulty::Easy.params());
//!
//! let result = searcher.search(&board, Stone::Black);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_winner;

use super::candidates::{get_candidates, rank_and_cap};
use super::SearchParams;

/// Base magnitude of a decided game
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Added per remaining ply so quicker wins (and slower losses) rank higher
pub const WIN_DEPTH_BONUS: i32 = 10;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
}

/// Minimax searcher for one set of [`SearchParams`].
pub struct Searcher {
    params: SearchParams,
    nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0 }
    }

    #[inline]
    pub fn params(&self) -> SearchParams {
        self.params
    }

    /// Pick the move for `ai_stone`.
    ///
    /// Root candidates are tried in ranked order; a later candidate replaces
    /// the best only with a strictly greater score, so ties go to the move
    /// with the higher threat ranking.
    pub fn search(&mut self, board: &Board, ai_stone: Stone) -> SearchResult {
        self.nodes = 0;
        let SearchParams {
            depth,
            candidate_cap,
        } = self.params;

        let moves = rank_and_cap(get_candidates(board), board, ai_stone, candidate_cap);

        let mut best: Option<(Pos, i32)> = None;
        for mov in moves {
            let Ok(child) = board.place(mov, ai_stone) else {
                continue;
            };
            let score = self.minimax(&child, depth.saturating_sub(1), -INF, INF, false, ai_stone);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mov, score)),
            }
        }

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// Decided games score `±(WIN_SCORE + depth * WIN_DEPTH_BONUS)`; leaves
    /// and full boards fall back to [`evaluate`] from `ai_stone`'s side.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_stone: Stone,
    ) -> i32 {
        self.nodes += 1;

        if let Some(win) = check_winner(board) {
            let magnitude = WIN_SCORE + depth as i32 * WIN_DEPTH_BONUS;
            return if win.winner == ai_stone { magnitude } else { -magnitude };
        }

        if depth == 0 || board.is_full() {
            return evaluate(board, ai_stone);
        }

        let to_move = if maximizing { ai_stone } else { ai_stone.opponent() };
        let moves = rank_and_cap(get_candidates(board), board, to_move, self.params.candidate_cap);

        let mut searched = false;
        let mut best = if maximizing { -INF } else { INF };

        for mov in moves {
            let Ok(child) = board.place(mov, to_move) else {
                continue;
            };
            searched = true;
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, ai_stone);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        if searched {
            best
        } else {
            evaluate(board, ai_stone)
        }
    }
}

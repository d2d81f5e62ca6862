//! Candidate move generation and ordering
//!
//! Search only looks at empty cells near existing stones, and orders them
//! by a cheap local threat score so alpha-beta cuts early.

use crate::board::{Bitboard, Board, Pos, Stone};
use crate::rules::DIRECTIONS;

/// Chebyshev radius around existing stones in which candidates are taken
pub const SEARCH_RADIUS: i32 = 2;

/// Stones counted on each side of a candidate when scoring threats
const THREAT_REACH: i32 = 4;

/// Empty cells within [`SEARCH_RADIUS`] of any stone.
///
/// An empty board yields only the center. Cells come out in first-seen order
/// while visiting stones row-major, which keeps ordering ties deterministic.
pub fn get_candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let mut seen = Bitboard::new();
    let mut candidates = Vec::new();

    for stone in board.occupied().iter_ones() {
        for dr in -SEARCH_RADIUS..=SEARCH_RADIUS {
            for dc in -SEARCH_RADIUS..=SEARCH_RADIUS {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let pos = Pos::new(stone.row + dr, stone.col + dc);
                if board.is_empty(pos) && !seen.get(pos) {
                    seen.set(pos);
                    candidates.push(pos);
                }
            }
        }
    }

    candidates
}

/// Length of the run `color` would form through `pos` along `(dr, dc)`,
/// counting the hypothetical stone itself.
#[inline]
fn run_through(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut len = 1;
    for sign in [1, -1] {
        for i in 1..=THREAT_REACH {
            if board.get(pos.offset(dr * sign, dc * sign, i)) != Some(color) {
                break;
            }
            len += 1;
        }
    }
    len
}

/// Cheap local value of playing `pos`: the squared run lengths it would make
/// for `perspective` (attack) plus those it would deny the opponent (block),
/// summed over the four axes.
pub fn threat_score(board: &Board, pos: Pos, perspective: Stone) -> i32 {
    let opponent = perspective.opponent();
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let own = run_through(board, pos, dr, dc, perspective);
            let opp = run_through(board, pos, dr, dc, opponent);
            own * own + opp * opp
        })
        .sum()
}

/// Order `candidates` by descending [`threat_score`] and keep the best
/// `limit`. The sort is stable, so equal scores keep their input order.
pub fn rank_and_cap(
    candidates: Vec<Pos>,
    board: &Board,
    perspective: Stone,
    limit: usize,
) -> Vec<Pos> {
    let mut scored: Vec<(Pos, i32)> = candidates
        .into_iter()
        .map(|pos| (pos, threat_score(board, pos, perspective)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(pos, _)| pos).collect()
}

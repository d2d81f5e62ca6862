//! Heuristic evaluation function for Gomoku board positions
//!
//! Every row, column and diagonal long enough to hold a five is split into
//! maximal runs of one color. Each run is scored by [`line_score`]; the
//! attacker's runs count positive and the opponent's negative.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

use super::patterns::line_score;

/// A line of cells to scan: start cell and step direction.
/// The line continues until it leaves the board.
type Line = (Pos, (i32, i32));

/// Evaluate the board from the perspective of `attacker`.
///
/// Returns a score where:
/// - Positive values favor `attacker`
/// - Negative values favor the opponent
/// - An existing five contributes `±PatternScore::FIVE`
#[must_use]
pub fn evaluate(board: &Board, attacker: Stone) -> i32 {
    if board.is_board_empty() {
        return 0;
    }
    lines().map(|line| evaluate_line(board, line, attacker)).sum()
}

/// All lines that can contain a five: rows, columns and both diagonal
/// orientations, skipping diagonals shorter than [`WIN_LENGTH`].
fn lines() -> impl Iterator<Item = Line> {
    let n = BOARD_SIZE as i32;
    let spare = n - WIN_LENGTH as i32;

    let rows = (0..n).map(|r| (Pos::new(r, 0), (0, 1)));
    let cols = (0..n).map(|c| (Pos::new(0, c), (1, 0)));

    // Down-right diagonals start on the top row or the left column
    let se = (0..=spare)
        .map(|c| (Pos::new(0, c), (1, 1)))
        .chain((1..=spare).map(|r| (Pos::new(r, 0), (1, 1))));

    // Up-right diagonals start on the left column or the bottom row
    let ne = (WIN_LENGTH as i32 - 1..n)
        .map(|r| (Pos::new(r, 0), (-1, 1)))
        .chain((1..=spare).map(move |c| (Pos::new(n - 1, c), (-1, 1))));

    rows.chain(cols).chain(se).chain(ne)
}

/// Score one line by walking it and segmenting into runs.
fn evaluate_line(board: &Board, (start, (dr, dc)): Line, attacker: Stone) -> i32 {
    let cells: Vec<Option<Stone>> = (0..)
        .map(|i| start.offset(dr, dc, i))
        .take_while(|pos| pos.is_valid())
        .map(|pos| board.get(pos))
        .collect();

    let len = cells.len();
    let mut score = 0;
    let mut i = 0;

    while i < len {
        let Some(stone) = cells[i] else {
            i += 1;
            continue;
        };

        let mut count = 1;
        while i + count < len && cells[i + count] == Some(stone) {
            count += 1;
        }

        let left_open = i > 0 && cells[i - 1].is_none();
        let right_open = i + count < len && cells[i + count].is_none();
        let open_ends = left_open as u8 + right_open as u8;

        let run = line_score(count, open_ends);
        if stone == attacker {
            score += run;
        } else {
            score -= run;
        }

        i += count;
    }

    score
}

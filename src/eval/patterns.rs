//! Pattern scores for Gomoku evaluation
//!
//! A run is scored by its length and how many of its two ends are open
//! (the adjacent cell exists and is empty).

use crate::board::WIN_LENGTH;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, regardless of ends
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_ (unstoppable)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to extend)
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Score a single run of `count` same-colored stones with `open_ends`
/// open ends (0, 1 or 2).
///
/// A run that cannot grow (both ends capped) is worth nothing unless it is
/// already a five.
pub fn line_score(count: usize, open_ends: u8) -> i32 {
    if count >= WIN_LENGTH {
        return PatternScore::FIVE;
    }
    if open_ends == 0 {
        return 0;
    }

    let open = open_ends >= 2;
    match count {
        4 if open => PatternScore::OPEN_FOUR,
        4 => PatternScore::CLOSED_FOUR,
        3 if open => PatternScore::OPEN_THREE,
        3 => PatternScore::CLOSED_THREE,
        2 if open => PatternScore::OPEN_TWO,
        2 => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}

//! Game rules for Gomoku
//!
//! Free-style five-in-a-row on a 15x15 board: five or more stones of one
//! color in a line wins, and a full board without a five is a draw.

pub mod win;

pub use win::{check_winner, is_board_full, WinResult, DIRECTIONS};

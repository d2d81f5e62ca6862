//! Gomoku engine with a minimax AI opponent
//!
//! Free-style five-in-a-row on a 15x15 board:
//! - White moves first
//! - Five or more in a row (any direction) wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Immutable board values backed by bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Run-based position evaluation
//! - [`search`]: Candidate generation, move ordering and alpha-beta search
//! - [`engine`]: The boundary a front end calls into
//! - [`game`]: Turn, undo and restart handling
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{get_best_move, Board, Difficulty, Pos, Stone};
//!
//! let board = Board::new().place(Pos::new(7, 7), Stone::White).unwrap();
//!
//! // AI responds as Black
//! if let Some(pos) = get_best_move(&board, Stone::Black, Difficulty::Easy) {
//!     let board = board.place(pos, Stone::Black).unwrap();
//!     println!("AI plays at ({}, {})\n{board}", pos.row, pos.col);
//! }
//! ```
//!
//! # Difficulty
//!
//! | Difficulty | depth | candidates per node |
//! |------------|-------|---------------------|
//! | Easy       | 1     | 10                  |
//! | Medium     | 2     | 15                  |
//! | Hard       | 3     | 20                  |
//!
//! These two numbers are the only levers on strength and latency; a search
//! always runs to completion.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use engine::{
    check_winner, create_board, get_best_move, get_best_move_by_name, get_candidates, is_board_full,
    is_valid_position, place_stone, AIEngine, MoveResult,
};
pub use error::{GameError, InvalidMove, ParseError};
pub use rules::WinResult;
pub use search::{Difficulty, SearchParams};

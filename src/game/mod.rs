//! Game flow for front ends: turns, undo by replay, restart

pub mod state;

pub use state::{GameMode, GameState, GameStatus, FIRST_PLAYER};

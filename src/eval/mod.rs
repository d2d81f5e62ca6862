//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers contiguous runs (twos, threes, fours, fives) and
//! how many of their ends are still open.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{line_score, PatternScore};

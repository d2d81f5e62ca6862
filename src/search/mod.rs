//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation and threat-based move ordering
//! - Difficulty levels and their search parameters
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod difficulty;

pub use alphabeta::{SearchResult, Searcher, WIN_DEPTH_BONUS, WIN_SCORE};
pub use candidates::{get_candidates, rank_and_cap, threat_score, SEARCH_RADIUS};
pub use difficulty::{Difficulty, SearchParams};

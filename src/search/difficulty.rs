//! Difficulty levels and the search parameters they map to

use std::str::FromStr;

use crate::error::ParseError;

/// How hard the engine plays.
///
/// Difficulty only selects a [`SearchParams`] pair; it carries no other
/// meaning. The mapping is fixed:
///
/// | Difficulty | depth | candidate cap |
/// |------------|-------|---------------|
/// | Easy       | 1     | 10            |
/// | Medium     | 2     | 15            |
/// | Hard       | 3     | 20            |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Search depth and per-node branching cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched, including the root move (>= 1)
    pub depth: u8,
    /// Maximum candidates tried at any node after ordering (>= 1)
    pub candidate_cap: usize,
}

impl SearchParams {
    /// Used when a difficulty name cannot be understood
    pub const FALLBACK: SearchParams = SearchParams {
        depth: 2,
        candidate_cap: 15,
    };

    /// Clamp both parameters to at least 1
    pub fn new(depth: u8, candidate_cap: usize) -> Self {
        Self {
            depth: depth.max(1),
            candidate_cap: candidate_cap.max(1),
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn params(self) -> SearchParams {
        match self {
            Difficulty::Easy => SearchParams {
                depth: 1,
                candidate_cap: 10,
            },
            Difficulty::Medium => SearchParams {
                depth: 2,
                candidate_cap: 15,
            },
            Difficulty::Hard => SearchParams {
                depth: 3,
                candidate_cap: 20,
            },
        }
    }

    /// Resolve search parameters from a difficulty name, never failing.
    ///
    /// Unknown names log a warning and use [`SearchParams::FALLBACK`].
    pub fn params_for_name(name: &str) -> SearchParams {
        match name.parse::<Difficulty>() {
            Ok(difficulty) => difficulty.params(),
            Err(err) => {
                let fallback = SearchParams::FALLBACK;
                tracing::warn!(
                    depth = fallback.depth,
                    cap = fallback.candidate_cap,
                    "{err}; using fallback search parameters"
                );
                fallback
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseError::UnknownDifficulty(other.to_string())),
        }
    }
}

use std::path::Path;

use crate::board::Stone;
use crate::error::ConfigError;
use crate::game::GameMode;
use crate::search::Difficulty;

/// Who sits on the other side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigMode {
    /// Against the engine
    #[default]
    Pve,
    /// Two humans at one board
    Pvp,
}

/// Settings for a game against the engine, loadable from TOML.
///
/// ```toml
/// mode = "pve"
/// difficulty = "hard"
/// ai_plays_as = "black"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: ConfigMode,
    pub difficulty: Difficulty,
    pub ai_plays_as: Stone,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: ConfigMode::Pve,
            difficulty: Difficulty::Medium,
            ai_plays_as: Stone::Black,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse TOML; unknown modes, difficulties and colors are rejected here.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ConfigMode::Pvp => GameMode::PvP,
            ConfigMode::Pve => GameMode::PvE {
                ai_plays_as: self.ai_plays_as,
                difficulty: self.difficulty,
            },
        }
    }
}

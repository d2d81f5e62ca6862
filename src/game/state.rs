//! Turn, undo and restart handling on top of the engine

use crate::board::{Board, Pos, Stone};
use crate::engine::AIEngine;
use crate::error::GameError;
use crate::rules::{check_winner, WinResult};
use crate::search::Difficulty;

/// Side that opens every game
pub const FIRST_PLAYER: Stone = Stone::White;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PvP,
    /// Player vs AI
    PvE {
        ai_plays_as: Stone,
        difficulty: Difficulty,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            ai_plays_as: Stone::Black,
            difficulty: Difficulty::Medium,
        }
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won(WinResult),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    mode: GameMode,
    current_turn: Stone,
    status: GameStatus,
    move_history: Vec<Pos>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: FIRST_PLAYER,
            status: GameStatus::Playing,
            move_history: Vec::new(),
        }
    }

    /// Start over in the same mode
    pub fn restart(&mut self) {
        *self = Self::new(self.mode);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn move_history(&self) -> &[Pos] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().copied()
    }

    /// Check if the engine is to move
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { ai_plays_as, .. } => {
                !self.status.is_over() && self.current_turn == ai_plays_as
            }
            GameMode::PvP => false,
        }
    }

    /// Play `pos` for the side to move.
    ///
    /// Invalid moves and moves after the end leave the state unchanged.
    pub fn place_stone(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        self.board = self.board.place(pos, self.current_turn)?;
        self.move_history.push(pos);
        self.current_turn = self.current_turn.opponent();

        self.status = match check_winner(&self.board) {
            Some(win) => GameStatus::Won(win),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::Playing,
        };

        if let GameStatus::Won(win) = self.status {
            tracing::info!(winner = %win.winner, moves = self.move_history.len(), "game won");
        }
        Ok(self.status)
    }

    /// Let the engine choose and play a move.
    ///
    /// Returns `Ok(None)` when the engine has no move (board full).
    pub fn play_ai_move(&mut self) -> Result<Option<Pos>, GameError> {
        let GameMode::PvE { difficulty, .. } = self.mode else {
            return Err(GameError::NotAiTurn);
        };
        if !self.is_ai_turn() {
            return Err(GameError::NotAiTurn);
        }

        let engine = AIEngine::new(difficulty);
        match engine.get_move(&self.board, self.current_turn) {
            Some(pos) => {
                self.place_stone(pos)?;
                Ok(Some(pos))
            }
            None => Ok(None),
        }
    }

    /// Take back the last move, or the last two against the engine so that
    /// the human is to move again. The board is rebuilt by replaying the
    /// remaining history from an empty board.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.move_history.is_empty() {
            return Err(GameError::NothingToUndo);
        }

        let steps = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };
        let keep = self.move_history.len() - steps;
        // Nothing changes unless the shorter history replays cleanly
        self.board = Board::replay(&self.move_history[..keep], FIRST_PLAYER)?;
        self.move_history.truncate(keep);
        self.current_turn = if keep % 2 == 0 {
            FIRST_PLAYER
        } else {
            FIRST_PLAYER.opponent()
        };
        self.status = GameStatus::Playing;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

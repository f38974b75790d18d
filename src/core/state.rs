//! Game state.
//!
//! ## GameStatus
//!
//! `InProgress` until someone completes five in a row or the board fills.
//! The transition to `Win`/`Draw` happens once; only a reset undoes it.
//!
//! ## GameState
//!
//! Everything the rules need: board, whose turn it is, status, and the
//! move history. The history uses `im::Vector`, so cloning a state (for
//! snapshots or playouts) is O(1).
//!
//! ## Snapshot
//!
//! The read-only view handed to presentation and transport layers.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::Board;
use super::player::Player;

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given player completed five in a row.
    Win(Player),
    /// The board filled with no winner.
    Draw,
}

/// Status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// Terminal: the given player won.
    Win(Player),
    /// Terminal: board full, no winner.
    Draw,
}

impl GameStatus {
    /// Check if no more moves are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The final outcome, if the game has ended.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Win(player) => Some(Outcome::Win(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Check if `player` won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == GameStatus::Win(player)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(player) => GameStatus::Win(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

/// Read-only view of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub active_player: Player,
    pub status: GameStatus,
}

/// Complete rules-level state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current board.
    pub board: Board,

    /// Player to move next (or who moved last, once terminal).
    pub active_player: Player,

    /// Game status.
    pub status: GameStatus,

    /// Turn number (starts at 1, advances after each non-terminal move).
    pub turn_number: u32,

    /// Committed moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// A fresh game with `first` to move.
    #[must_use]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            active_player: first,
            status: GameStatus::InProgress,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Read-only view of board, active player and status.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            active_player: self.active_player,
            status: self.status,
        }
    }

    /// Number of committed moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The most recent committed move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::PlayerOne)
    }
}

//! Players and cell values.
//!
//! ## Player
//!
//! The two seats at a Pentago table. `PlayerOne` moves first by default.
//!
//! ## Cell
//!
//! The content of a single board cell: empty or owned by one player.
//! A closed enumeration, so a board can never hold an invalid value.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (marked `X`).
    PlayerOne,
    /// Second player (marked `O`).
    PlayerTwo,
}

impl Player {
    /// Both players, in seating order.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// The other player.
    ///
    /// ```
    /// use pentago_engine::core::Player;
    ///
    /// assert_eq!(Player::PlayerOne.opponent(), Player::PlayerTwo);
    /// assert_eq!(Player::PlayerTwo.opponent(), Player::PlayerOne);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Board marker used in text renderings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "Player 1"),
            Player::PlayerTwo => write!(f, "Player 2"),
        }
    }
}

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Piece owned by `Player::PlayerOne`.
    PlayerOne,
    /// Piece owned by `Player::PlayerTwo`.
    PlayerTwo,
}

impl Cell {
    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if the cell holds a piece of `player`.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Board marker used in text renderings (`.` for empty).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

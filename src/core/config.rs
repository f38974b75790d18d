//! Engine configuration.
//!
//! Callers configure the engine at startup by providing an `EngineConfig`.
//! Every field has a default matching the classic two-player game, so
//! `EngineConfig::default()` is the usual starting point.

use serde::{Deserialize, Serialize};

use super::action::Rotation;
use super::error::MoveError;
use super::player::Player;

/// How the controller treats a rotation code outside `0..=8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationPolicy {
    /// Silently treat the code as 0 (no rotation).
    #[default]
    Coerce,
    /// Fail with `MoveError::InvalidRotation`.
    Reject,
}

impl RotationPolicy {
    /// Interpret a raw rotation code under this policy.
    pub fn interpret(self, code: i64) -> Result<Rotation, MoveError> {
        match (Rotation::from_code(code), self) {
            (Some(rotation), _) => Ok(rotation),
            (None, RotationPolicy::Coerce) => Ok(Rotation::Skip),
            (None, RotationPolicy::Reject) => Err(MoveError::InvalidRotation(code)),
        }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Handling of out-of-range rotation codes (default: coerce to 0).
    pub rotation_policy: RotationPolicy,

    /// Who moves first after a reset (default: player one).
    pub starting_player: Player,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rotation_policy: RotationPolicy::Coerce,
            starting_player: Player::PlayerOne,
        }
    }
}

impl EngineConfig {
    /// Set the rotation policy.
    #[must_use]
    pub fn with_rotation_policy(mut self, policy: RotationPolicy) -> Self {
        self.rotation_policy = policy;
        self
    }

    /// Set the starting player.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }
}

/// Random playout parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the playout RNG.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Stop after this many moves even if the game continues (0 = unlimited).
    pub max_moves: u32,

    /// Rules configuration for the simulated game.
    pub engine: EngineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_moves: 0,
            engine: EngineConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the move cap.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Set the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

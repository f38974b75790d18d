//! Core engine types: players, board, moves, state, configuration, RNG, errors.
//!
//! Everything here is a plain value. Rules live in `crate::rules`; the
//! stateful turn flow lives in `crate::game`.

pub mod player;
pub mod board;
pub mod action;
pub mod state;
pub mod config;
pub mod error;
pub mod rng;

pub use player::{Cell, Player};
pub use board::{Board, Coord, BOARD_SIZE, CELL_COUNT};
pub use action::{Direction, Move, MoveRecord, Quadrant, QuarterTurn, Rotation};
pub use state::{GameState, GameStatus, Outcome, Snapshot};
pub use config::{EngineConfig, RotationPolicy, SimConfig};
pub use error::{CodecError, MoveError};
pub use rng::{GameRng, GameRngState};

//! # pentago-engine
//!
//! A rule engine for Pentago: two players take turns placing a piece on a
//! 6×6 board and then twisting one of its four 3×3 quadrants a quarter turn.
//! Five in a row wins.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: `Board` is `Copy`; placing and rotating
//!    return new boards, so anything a caller has observed stays valid.
//!
//! 2. **Pure rules, one owner of state**: everything in `rules` is a pure
//!    function. `TurnController` is the only stateful piece and is owned by
//!    its caller.
//!
//! 3. **Typed rejections**: every invalid call returns a `MoveError` and
//!    leaves state untouched. Nothing panics on caller input.
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, moves, state, configuration, RNG, errors
//! - `rules`: Rotation, win detection, validation, `RulesEngine`
//! - `game`: `TurnController` state machine
//! - `codec`: Snapshot encoding for persistence/transport collaborators
//! - `sim`: Seeded random playouts
//!
//! ## Example
//!
//! ```
//! use pentago_engine::{MoveOutcome, Outcome, Player, TurnController};
//!
//! let mut game = TurnController::default();
//! for col in 0..5 {
//!     game.select_cell(0, col).unwrap();
//!     let outcome = game.confirm_move().unwrap();
//!     if col == 4 {
//!         assert!(matches!(
//!             outcome,
//!             MoveOutcome::Finished { outcome: Outcome::Win(Player::PlayerOne), .. }
//!         ));
//!         break;
//!     }
//!     game.select_cell(5, col).unwrap();
//!     game.confirm_move().unwrap();
//! }
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod codec;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Player,
    Direction, Quadrant, QuarterTurn, Rotation, Move, MoveRecord,
    GameState, GameStatus, Outcome, Snapshot,
    EngineConfig, RotationPolicy, SimConfig,
    MoveError, CodecError,
    GameRng, GameRngState,
};

pub use crate::rules::{
    RulesEngine, PentagoRules,
    rotate, evaluate, validate, find_line, LineDirection, WinningLine,
};

pub use crate::game::{MoveOutcome, Phase, TurnController};

pub use crate::sim::{MovePolicy, PlayoutReport, RandomPolicy};

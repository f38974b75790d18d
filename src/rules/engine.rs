//! Rules engine trait and the Pentago implementation.
//!
//! `RulesEngine` is the seam between stateless rules and the stateful
//! drivers (`TurnController`, random playouts):
//! - What moves are legal
//! - How a move transforms a state
//! - Whether the game is over

use tracing::{debug, instrument};

use super::rotation::rotate;
use super::validator::validate;
use super::win::evaluate;
use crate::core::{EngineConfig, GameState, Move, MoveError, MoveRecord, Outcome, Rotation};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty once the game is terminal
/// - `apply_move`: Must be deterministic and must not modify its input
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// State at the start of a game.
    fn initial_state(&self) -> GameState {
        GameState::new(self.config().starting_player)
    }

    /// All moves the active player may make.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Apply a move for the active player, returning the successor state.
    fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<Outcome> {
        state.status.outcome()
    }
}

/// Standard Pentago rules.
#[derive(Clone, Debug, Default)]
pub struct PentagoRules {
    config: EngineConfig,
}

impl PentagoRules {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for PentagoRules {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every empty cell paired with each of the nine rotations (including
    /// no rotation). Different moves may produce the same board.
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.status.is_terminal() {
            return vec![];
        }
        state
            .board
            .empty_cells()
            .flat_map(|at| Rotation::all().map(move |rotation| Move::new(at, rotation)))
            .collect()
    }

    /// Validate, place, rotate, evaluate, then advance the turn unless the
    /// game ended.
    #[instrument(level = "trace", skip(self, state), fields(player = ?state.active_player))]
    fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError> {
        let at = validate(state, Some(mv.at))?;
        let player = state.active_player;

        let placed = state.board.with_placement_at(at, player)?;
        let board = rotate(&placed, mv.rotation);
        let status = evaluate(&board, player);

        let mut next = state.clone();
        next.board = board;
        next.status = status;
        next.history.push_back(MoveRecord::new(player, mv, state.turn_number));

        if status.is_terminal() {
            debug!(%player, ?status, "game reached terminal status");
        } else {
            next.active_player = player.opponent();
            next.turn_number += 1;
        }

        Ok(next)
    }
}

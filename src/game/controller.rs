//! Turn controller: the single owned, mutable aggregate of a game.
//!
//! The controller stages a selection and a rotation, then commits them on
//! `confirm_move`:
//!
//! ```text
//! AwaitingSelection --select_cell--> SelectionStaged --confirm_move--> (evaluate)
//!        ^                                                                  |
//!        +----------------------- InProgress ------------------------------+
//!                                                                           |
//!                                 Terminal <------------ Win | Draw ---------+
//! ```
//!
//! Every rejected call leaves the controller exactly as it was. `reset` is
//! accepted from any phase.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    Board, Coord, EngineConfig, GameState, Move, MoveError, Outcome, Player, Rotation, Snapshot,
};
use crate::rules::{validate, PentagoRules, RulesEngine};

/// Where the controller is in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to pick a cell.
    AwaitingSelection,
    /// A cell is staged; `confirm_move` will try to commit it.
    SelectionStaged,
    /// The game has ended; only `reset` is accepted.
    Terminal,
}

/// Result of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on; `active_player` moves next.
    Continued { board: Board, active_player: Player },
    /// The move ended the game.
    Finished { board: Board, outcome: Outcome },
}

impl MoveOutcome {
    /// Board after the move.
    #[must_use]
    pub fn board(&self) -> &Board {
        match self {
            MoveOutcome::Continued { board, .. } | MoveOutcome::Finished { board, .. } => board,
        }
    }

    /// Check if the move ended the game.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, MoveOutcome::Finished { .. })
    }
}

/// Drives one game through select → rotate → confirm turns.
///
/// ## Example
///
/// ```
/// use pentago_engine::core::{Cell, GameStatus, Player};
/// use pentago_engine::game::{MoveOutcome, TurnController};
///
/// let mut game = TurnController::default();
/// game.select_cell(2, 2).unwrap();
/// game.set_rotation(0).unwrap();
///
/// let outcome = game.confirm_move().unwrap();
/// assert!(matches!(outcome, MoveOutcome::Continued { active_player: Player::PlayerTwo, .. }));
///
/// let view = game.inspect();
/// assert_eq!(view.board.get(2, 2).unwrap(), Cell::PlayerOne);
/// assert_eq!(view.status, GameStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController<E: RulesEngine = PentagoRules> {
    rules: E,
    state: GameState,
    selection: Option<Coord>,
    pending_rotation: Rotation,
}

impl TurnController<PentagoRules> {
    /// Create a controller with standard rules.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rules(PentagoRules::new(config))
    }
}

impl Default for TurnController<PentagoRules> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<E: RulesEngine> TurnController<E> {
    /// Create a controller over any rules engine.
    pub fn with_rules(rules: E) -> Self {
        let state = rules.initial_state();
        Self {
            rules,
            state,
            selection: None,
            pending_rotation: Rotation::Skip,
        }
    }

    // === Staging ===

    /// Stage `(row, col)` as the active player's candidate cell.
    ///
    /// Replaces any earlier selection. Occupancy is not checked until
    /// `confirm_move`.
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        let at = Coord::new(row, col)?;
        debug!(player = %self.state.active_player, %at, "cell selected");
        self.selection = Some(at);
        Ok(())
    }

    /// Drop the staged selection, if any.
    pub fn cancel_selection(&mut self) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        self.selection = None;
        Ok(())
    }

    /// Stage a rotation code for the next confirm.
    ///
    /// Codes outside `0..=8` become 0 under `RotationPolicy::Coerce` and are
    /// rejected under `RotationPolicy::Reject`. Returns the staged rotation.
    pub fn set_rotation(&mut self, code: i64) -> Result<Rotation, MoveError> {
        self.ensure_in_progress()?;
        let rotation = self.rules.config().rotation_policy.interpret(code)?;
        debug!(code, %rotation, "rotation staged");
        self.pending_rotation = rotation;
        Ok(rotation)
    }

    // === Commit ===

    /// Commit the staged selection and rotation for the active player.
    ///
    /// On rejection nothing changes, including the staged selection, so the
    /// caller may fix the input and retry.
    pub fn confirm_move(&mut self) -> Result<MoveOutcome, MoveError> {
        let player = self.state.active_player;
        let at = validate(&self.state, self.selection).inspect_err(|err| {
            debug!(%player, %err, "move rejected");
        })?;

        let mv = Move::new(at, self.pending_rotation);
        let next = self.rules.apply_move(&self.state, mv)?;

        self.state = next;
        self.selection = None;
        self.pending_rotation = Rotation::Skip;

        let board = self.state.board;
        match self.state.status.outcome() {
            Some(outcome) => {
                info!(%player, ?outcome, moves = self.state.move_count(), "game finished");
                Ok(MoveOutcome::Finished { board, outcome })
            }
            None => {
                debug!(%player, %at, rotation = %mv.rotation, "move committed");
                Ok(MoveOutcome::Continued {
                    board,
                    active_player: self.state.active_player,
                })
            }
        }
    }

    /// Stage `mv` and confirm it in one call.
    ///
    /// `mv` is validated before anything is staged, so a rejected call keeps
    /// whatever selection and rotation were staged before it.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let player = self.state.active_player;
        validate(&self.state, Some(mv.at)).inspect_err(|err| {
            debug!(%player, %err, "move rejected");
        })?;

        self.selection = Some(mv.at);
        self.pending_rotation = mv.rotation;
        self.confirm_move()
    }

    /// Discard everything and start a new game.
    pub fn reset(&mut self) {
        info!(moves = self.state.move_count(), "game reset");
        self.state = self.rules.initial_state();
        self.selection = None;
        self.pending_rotation = Rotation::Skip;
    }

    // === Queries ===

    /// Read-only view of board, active player and status.
    #[must_use]
    pub fn inspect(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Full rules-level state, including move history.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &E {
        &self.rules
    }

    #[must_use]
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    #[must_use]
    pub fn pending_rotation(&self) -> Rotation {
        self.pending_rotation
    }

    /// Current phase of the turn cycle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.status.is_terminal() {
            Phase::Terminal
        } else if self.selection.is_some() {
            Phase::SelectionStaged
        } else {
            Phase::AwaitingSelection
        }
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.state.status.is_terminal() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

//! Pre-placement move validation.

use tracing::instrument;

use crate::core::{Coord, GameState, MoveError};

/// Check a staged selection against the current state.
///
/// Checks run in this order:
/// 1. `GameAlreadyOver` if the status is terminal
/// 2. `NoSelection` if nothing is staged
/// 3. `CellOccupied` if the target already holds a piece
///
/// Returns the target coordinate on success. Placement re-checks occupancy
/// on its own, so skipping this step cannot corrupt a board.
#[instrument(level = "trace", skip(state), fields(status = ?state.status))]
pub fn validate(state: &GameState, selection: Option<Coord>) -> Result<Coord, MoveError> {
    if state.status.is_terminal() {
        return Err(MoveError::GameAlreadyOver);
    }
    let at = selection.ok_or(MoveError::NoSelection)?;
    if !state.board.cell(at).is_empty() {
        return Err(MoveError::CellOccupied {
            row: at.row(),
            col: at.col(),
        });
    }
    Ok(at)
}

//! Quadrant rotation.
//!
//! A rotation reads every cell from the pre-rotation board and writes into a
//! fresh copy, so no cell of the quadrant is overwritten before it is read.
//! The 27 cells outside the quadrant are carried over unchanged.

use tracing::instrument;

use crate::core::{Board, Coord, Direction, QuarterTurn, Rotation, BOARD_SIZE};

/// Apply `rotation` to `board`, returning the rotated board.
///
/// ```
/// use pentago_engine::core::{Board, Cell, Player, Rotation};
/// use pentago_engine::rules::rotate;
///
/// let board = Board::new().with_placement(0, 0, Player::PlayerOne).unwrap();
///
/// // Code 1: top-left quadrant clockwise. Corner (0,0) moves to (0,2).
/// let turned = rotate(&board, Rotation::from_code(1).unwrap());
/// assert_eq!(turned.get(0, 2).unwrap(), Cell::PlayerOne);
/// assert_eq!(turned.get(0, 0).unwrap(), Cell::Empty);
/// ```
#[instrument(level = "trace")]
#[must_use]
pub fn rotate(board: &Board, rotation: Rotation) -> Board {
    match rotation {
        Rotation::Skip => *board,
        Rotation::Turn(turn) => rotate_quadrant(board, turn),
    }
}

fn rotate_quadrant(board: &Board, turn: QuarterTurn) -> Board {
    let (r0, c0) = turn.quadrant.origin();
    let mut out = *board;

    for i in 0..3 {
        for j in 0..3 {
            let (ti, tj) = match turn.direction {
                Direction::Clockwise => (j, 2 - i),
                Direction::CounterClockwise => (2 - j, i),
            };
            let from = Coord::from_index((r0 + i) * BOARD_SIZE + c0 + j);
            let to = Coord::from_index((r0 + ti) * BOARD_SIZE + c0 + tj);
            out.set(to, board.cell(from));
        }
    }

    out
}

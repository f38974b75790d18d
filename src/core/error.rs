//! Error types.
//!
//! Every rejection is recoverable: the operation that failed leaves the
//! prior state untouched and the caller may retry with corrected input.

use thiserror::Error;

/// Why a move-related call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Confirm attempted with no staged cell.
    #[error("no cell selected")]
    NoSelection,

    /// Target cell already holds a piece.
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Coordinates outside the 6×6 board.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// The game has already ended; only `reset` is accepted.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Rotation code outside 0..=8 under `RotationPolicy::Reject`.
    #[error("rotation code {0} is not in 0..=8")]
    InvalidRotation(i64),
}

/// Failure to encode or decode a snapshot.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Binary encoding failed.
    #[error("bincode: {0}")]
    Bincode(#[from] bincode::Error),

    /// A serialized board did not hold exactly 36 cells.
    #[error("board must have 36 cells, got {0}")]
    BadBoardLength(usize),

    /// A text board contained a character other than `.`, `X` or `O`.
    #[error("unexpected board symbol {0:?}")]
    BadSymbol(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(MoveError::NoSelection.to_string(), "no cell selected");
        assert_eq!(
            MoveError::CellOccupied { row: 1, col: 4 }.to_string(),
            "cell (1, 4) is already occupied"
        );
        assert_eq!(
            MoveError::OutOfRange { row: 6, col: 0 }.to_string(),
            "cell (6, 0) is outside the board"
        );
        assert_eq!(MoveError::InvalidRotation(-3).to_string(), "rotation code -3 is not in 0..=8");
        assert_eq!(CodecError::BadBoardLength(35).to_string(), "board must have 36 cells, got 35");
    }
}

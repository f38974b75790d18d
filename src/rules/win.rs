//! Five-in-a-row and draw detection.
//!
//! Only the player who just moved is checked. A rotation can complete a line
//! for the opponent as well; that line does not count until the opponent's
//! own move leaves it standing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Board, Coord, GameStatus, Player, BOARD_SIZE};

/// Number of consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 5;

/// Orientation of a line, in the order lines are scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineDirection {
    /// Scan order.
    pub const ALL: [LineDirection; 4] = [
        LineDirection::Row,
        LineDirection::Column,
        LineDirection::Diagonal,
        LineDirection::AntiDiagonal,
    ];

    fn lines(self) -> &'static [Line] {
        match self {
            LineDirection::Row => &ROWS,
            LineDirection::Column => &COLUMNS,
            LineDirection::Diagonal => &DIAGONALS,
            LineDirection::AntiDiagonal => &ANTI_DIAGONALS,
        }
    }
}

/// A winning run of five.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: Player,
    pub direction: LineDirection,
    /// The five cells, in scan order.
    pub cells: [Coord; WIN_LENGTH],
}

/// A straight path across the board long enough to hold five.
struct Line {
    start: (usize, usize),
    step: (usize, isize),
    len: usize,
}

impl Line {
    const fn row(r: usize) -> Self {
        Self { start: (r, 0), step: (0, 1), len: BOARD_SIZE }
    }

    const fn column(c: usize) -> Self {
        Self { start: (0, c), step: (1, 0), len: BOARD_SIZE }
    }

    fn at(&self, k: usize) -> Coord {
        let row = self.start.0 + self.step.0 * k;
        let col = self.start.1.wrapping_add_signed(self.step.1 * k as isize);
        Coord::from_index(row * BOARD_SIZE + col)
    }
}

const ROWS: [Line; BOARD_SIZE] = [
    Line::row(0),
    Line::row(1),
    Line::row(2),
    Line::row(3),
    Line::row(4),
    Line::row(5),
];

const COLUMNS: [Line; BOARD_SIZE] = [
    Line::column(0),
    Line::column(1),
    Line::column(2),
    Line::column(3),
    Line::column(4),
    Line::column(5),
];

// Shorter diagonals cannot hold five and are not scanned.
const DIAGONALS: [Line; 3] = [
    Line { start: (0, 0), step: (1, 1), len: 6 },
    Line { start: (0, 1), step: (1, 1), len: 5 },
    Line { start: (1, 0), step: (1, 1), len: 5 },
];

const ANTI_DIAGONALS: [Line; 3] = [
    Line { start: (0, 5), step: (1, -1), len: 6 },
    Line { start: (0, 4), step: (1, -1), len: 5 },
    Line { start: (1, 5), step: (1, -1), len: 5 },
];

/// Walk `line` counting consecutive `player` cells; the counter resets on
/// any other cell. Returns the first run of five.
fn scan(board: &Board, player: Player, line: &Line) -> Option<[Coord; WIN_LENGTH]> {
    let mut count = 0;
    for k in 0..line.len {
        if board.cell(line.at(k)).is_owned_by(player) {
            count += 1;
        } else {
            count = 0;
        }
        if count == WIN_LENGTH {
            let first = k + 1 - WIN_LENGTH;
            return Some(std::array::from_fn(|n| line.at(first + n)));
        }
    }
    None
}

/// Find the first five-in-a-row for `player`, scanning rows, then columns,
/// then diagonals, then anti-diagonals.
#[instrument(level = "trace")]
#[must_use]
pub fn find_line(board: &Board, player: Player) -> Option<WinningLine> {
    LineDirection::ALL.into_iter().find_map(|direction| {
        direction
            .lines()
            .iter()
            .find_map(|line| scan(board, player, line))
            .map(|cells| WinningLine { player, direction, cells })
    })
}

/// Check if `player` has five in a row anywhere.
#[must_use]
pub fn has_five(board: &Board, player: Player) -> bool {
    find_line(board, player).is_some()
}

/// Status of `board` after `just_moved` finished their turn.
///
/// `Win(just_moved)` if they have five in a row, else `Draw` if the board
/// is full, else `InProgress`.
///
/// ```
/// use pentago_engine::core::{Board, GameStatus, Player};
/// use pentago_engine::rules::evaluate;
///
/// assert_eq!(evaluate(&Board::new(), Player::PlayerOne), GameStatus::InProgress);
/// ```
#[instrument(level = "trace")]
#[must_use]
pub fn evaluate(board: &Board, just_moved: Player) -> GameStatus {
    if has_five(board, just_moved) {
        GameStatus::Win(just_moved)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

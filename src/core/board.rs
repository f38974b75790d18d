//! The 6×6 Pentago board.
//!
//! ## Coord
//!
//! A validated (row, col) pair. Constructing one is the only place range
//! checks happen; everything downstream indexes without checking.
//!
//! ## Board
//!
//! An immutable snapshot of the grid. `Board` is `Copy` (36 bytes), and every
//! transformation returns a new value, so a board a caller has observed is
//! never changed underneath it.
//!
//! Serializes as a flat 36-element sequence in row-major order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CodecError, MoveError};
use super::player::{Cell, Player};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 6;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A position on the board, guaranteed to be in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a coordinate, failing with `OutOfRange` unless both
    /// components are in `0..6`.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Create from a row-major index in `0..36`.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Row-major index in `0..36`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// All 36 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable 6×6 grid of cells, stored row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from explicit rows.
    #[must_use]
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            board.cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        board
    }

    /// Get the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Ok(self.cell(Coord::new(row, col)?))
    }

    /// Get the cell at a validated coordinate.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Return a copy of this board with `player`'s piece at `(row, col)`.
    ///
    /// ```
    /// use pentago_engine::core::{Board, Cell, Player};
    ///
    /// let empty = Board::new();
    /// let next = empty.with_placement(2, 2, Player::PlayerOne).unwrap();
    ///
    /// assert_eq!(next.get(2, 2).unwrap(), Cell::PlayerOne);
    /// assert_eq!(empty.get(2, 2).unwrap(), Cell::Empty);
    /// assert!(next.with_placement(2, 2, Player::PlayerTwo).is_err());
    /// ```
    pub fn with_placement(&self, row: usize, col: usize, player: Player) -> Result<Board, MoveError> {
        self.with_placement_at(Coord::new(row, col)?, player)
    }

    /// `with_placement` for an already validated coordinate.
    pub fn with_placement_at(&self, coord: Coord, player: Player) -> Result<Board, MoveError> {
        if !self.cell(coord).is_empty() {
            return Err(MoveError::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        let mut next = *self;
        next.cells[coord.index()] = Cell::from(player);
        Ok(next)
    }

    /// Overwrite a cell. Only for transforms building a fresh board.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&coord| self.cell(coord).is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = CodecError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| CodecError::BadBoardLength(v.len()))?;
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

/// Six lines of six symbols: `.` empty, `X` player one, `O` player two.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for (r, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        write!(f, ")")
    }
}

/// Parse the `Display` format. Whitespace is ignored, so rows may be
/// split across lines or written on one line.
impl FromStr for Board {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Ok(Cell::Empty),
                'X' => Ok(Cell::PlayerOne),
                'O' => Ok(Cell::PlayerTwo),
                other => Err(CodecError::BadSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::try_from(cells)
    }
}

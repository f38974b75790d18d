//! Move representation: a placement plus an optional quadrant twist.
//!
//! A Pentago turn is compositional:
//! - "where" = the `Coord` receiving the mover's piece
//! - "twist" = a `Rotation`, either `Skip` or a quarter turn of one quadrant
//!
//! Rotations have a compact integer code used at the presentation boundary:
//!
//! | code | quadrant     | direction         |
//! |------|--------------|-------------------|
//! | 0    | -            | none              |
//! | 1–4  | TL, TR, BL, BR | clockwise       |
//! | 5–8  | TL, TR, BL, BR | counter-clockwise |

use serde::{Deserialize, Serialize};

use super::board::Coord;
use super::player::Player;

/// One of the four 3×3 sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in code order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Board coordinate of the quadrant's top-left corner.
    #[must_use]
    pub const fn origin(self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, 3),
            Quadrant::BottomLeft => (3, 0),
            Quadrant::BottomRight => (3, 3),
        }
    }

    /// Check if a coordinate lies inside this quadrant.
    #[must_use]
    pub fn contains(self, coord: Coord) -> bool {
        let (r0, c0) = self.origin();
        (r0..r0 + 3).contains(&coord.row()) && (c0..c0 + 3).contains(&coord.col())
    }

    const fn ordinal(self) -> u8 {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A 90° turn of one quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuarterTurn {
    pub quadrant: Quadrant,
    pub direction: Direction,
}

impl QuarterTurn {
    #[must_use]
    pub const fn new(quadrant: Quadrant, direction: Direction) -> Self {
        Self { quadrant, direction }
    }
}

/// The twist applied after placing a piece.
///
/// ```
/// use pentago_engine::core::{Direction, Quadrant, QuarterTurn, Rotation};
///
/// assert_eq!(Rotation::from_code(0), Some(Rotation::Skip));
/// assert_eq!(
///     Rotation::from_code(6),
///     Some(Rotation::Turn(QuarterTurn::new(Quadrant::TopRight, Direction::CounterClockwise)))
/// );
/// assert_eq!(Rotation::from_code(9), None);
/// assert_eq!(Rotation::from_code(6).unwrap().code(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Leave the board as placed.
    #[default]
    Skip,
    /// Turn one quadrant.
    Turn(QuarterTurn),
}

impl Rotation {
    /// All nine rotations in code order (0..=8).
    pub fn all() -> impl Iterator<Item = Rotation> {
        (0..=8).filter_map(Rotation::from_code)
    }

    /// Decode a rotation code. `None` if `code` is outside `0..=8`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        let code = u8::try_from(code).ok()?;
        let direction = match code {
            0 => return Some(Rotation::Skip),
            1..=4 => Direction::Clockwise,
            5..=8 => Direction::CounterClockwise,
            _ => return None,
        };
        let quadrant = Quadrant::ALL[usize::from((code - 1) % 4)];
        Some(Rotation::Turn(QuarterTurn::new(quadrant, direction)))
    }

    /// Encode as a rotation code in `0..=8`.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Rotation::Skip => 0,
            Rotation::Turn(QuarterTurn { quadrant, direction }) => {
                let base = match direction {
                    Direction::Clockwise => 1,
                    Direction::CounterClockwise => 5,
                };
                base + quadrant.ordinal()
            }
        }
    }

    /// The rotation undoing this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Rotation::Skip => Rotation::Skip,
            Rotation::Turn(QuarterTurn { quadrant, direction }) => {
                Rotation::Turn(QuarterTurn::new(quadrant, direction.reversed()))
            }
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rotation::Skip => write!(f, "no rotation"),
            Rotation::Turn(turn) => write!(f, "{:?} {:?}", turn.quadrant, turn.direction),
        }
    }
}

/// A complete turn: where to place, then how to twist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub at: Coord,
    pub rotation: Rotation,
}

impl Move {
    #[must_use]
    pub const fn new(at: Coord, rotation: Rotation) -> Self {
        Self { at, rotation }
    }

    /// A placement with no twist.
    #[must_use]
    pub const fn place(at: Coord) -> Self {
        Self::new(at, Rotation::Skip)
    }
}

/// A committed move with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move taken.
    pub mv: Move,

    /// Turn number the move was made on (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(player: Player, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        let expected = [
            (1, Quadrant::TopLeft, Direction::Clockwise),
            (2, Quadrant::TopRight, Direction::Clockwise),
            (3, Quadrant::BottomLeft, Direction::Clockwise),
            (4, Quadrant::BottomRight, Direction::Clockwise),
            (5, Quadrant::TopLeft, Direction::CounterClockwise),
            (6, Quadrant::TopRight, Direction::CounterClockwise),
            (7, Quadrant::BottomLeft, Direction::CounterClockwise),
            (8, Quadrant::BottomRight, Direction::CounterClockwise),
        ];
        for (code, quadrant, direction) in expected {
            let rotation = Rotation::from_code(code).unwrap();
            assert_eq!(rotation, Rotation::Turn(QuarterTurn::new(quadrant, direction)));
            assert_eq!(i64::from(rotation.code()), code);
        }
    }

    #[test]
    fn test_codes_outside_range() {
        for code in [-1, 9, 10, 255, 256, i64::MIN, i64::MAX] {
            assert_eq!(Rotation::from_code(code), None, "code {code}");
        }
    }

    #[test]
    fn test_all_has_nine_distinct() {
        let codes: Vec<u8> = Rotation::all().map(Rotation::code).collect();
        assert_eq!(codes, (0..=8).collect::<Vec<u8>>());
    }

    #[test]
    fn test_inverse_pairs() {
        assert_eq!(Rotation::Skip.inverse(), Rotation::Skip);
        for code in 1..=4 {
            let cw = Rotation::from_code(code).unwrap();
            let ccw = Rotation::from_code(code + 4).unwrap();
            assert_eq!(cw.inverse(), ccw);
            assert_eq!(ccw.inverse(), cw);
        }
    }

    #[test]
    fn test_quadrant_contains() {
        let c = Coord::new(4, 1).unwrap();
        assert!(Quadrant::BottomLeft.contains(c));
        assert!(!Quadrant::TopLeft.contains(c));
        assert!(!Quadrant::BottomRight.contains(c));

        for coord in Coord::all() {
            let owners = Quadrant::ALL.iter().filter(|q| q.contains(coord)).count();
            assert_eq!(owners, 1);
        }
    }

    #[test]
    fn test_move_record_serialization() {
        let mv = Move::new(Coord::new(2, 5).unwrap(), Rotation::from_code(7).unwrap());
        let record = MoveRecord::new(Player::PlayerTwo, mv, 4);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

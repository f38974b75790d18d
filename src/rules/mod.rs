//! Pentago rules.
//!
//! Pure functions over `Board` and `GameState`:
//! - `rotation`: quadrant quarter turns
//! - `win`: five-in-a-row and draw detection
//! - `validator`: pre-placement checks
//! - `engine`: the `RulesEngine` trait tying them into a move step
//!
//! Nothing here holds state between calls.

pub mod engine;
pub mod rotation;
pub mod validator;
pub mod win;

pub use engine::{PentagoRules, RulesEngine};
pub use rotation::rotate;
pub use validator::validate;
pub use win::{evaluate, find_line, has_five, LineDirection, WinningLine, WIN_LENGTH};

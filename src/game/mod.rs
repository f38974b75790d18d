//! Stateful game driving.
//!
//! `TurnController` owns one game's mutable state and is the call surface a
//! presentation layer talks to. It is single-threaded: every method takes
//! `&self` or `&mut self`, so callers sharing a game across tasks must wrap
//! it in their own lock.

mod controller;

pub use controller::{MoveOutcome, Phase, TurnController};

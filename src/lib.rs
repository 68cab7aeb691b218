//! Deterministic solver for rectangular sliding-tile ("fifteen") puzzles.
//!
//! The solved layout keeps the blank (label 0) in the top-left corner and
//! numbers the remaining cells row-major, so `cell(row, col) == row * width + col`.
//! [`Puzzle::solve_puzzle`] places tiles bottom-up with a fixed repertoire of
//! move patterns and returns the concatenated move string.

pub mod error;
pub mod invariants;
pub mod moves;
pub mod puzzle;
pub mod solver;

pub use error::PuzzleError;
pub use moves::Move;
pub use puzzle::Puzzle;

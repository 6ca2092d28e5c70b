//! Kennel Puzzle Solver Library
//!
//! An exact packing puzzle: dog-shaped pieces, each usable in any of its
//! four quarter-turn orientations, must cover every free square of a walled
//! yard exactly once. The crate provides the character-grid and piece
//! representation, the copy-on-write board, the backtracking search engine,
//! and the standard puzzle definition.
//!
//! Pieces are rotated but never reflected, so a puzzle whose solution
//! requires a mirrored piece is reported as unsolvable.

pub mod board;
pub mod grid;
pub mod pieces;
pub mod puzzles;
pub mod solver;

pub use board::{Board, PlacementError};
pub use grid::Grid;
pub use pieces::Piece;
pub use solver::{solve, SolveError};

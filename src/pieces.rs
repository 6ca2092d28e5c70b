//! Puzzle pieces and their precomputed orientations.

use crate::grid::Grid;

/// A named piece shape together with its four quarter-turn orientations.
///
/// Rotation cost is paid once at construction, not per search step. Only the
/// four rotations are generated, never reflections: a puzzle whose solution
/// needs a mirrored piece is reported unsolvable rather than the solver
/// flipping pieces over.
#[derive(Clone, Debug)]
pub struct Piece {
    name: String,
    orientations: [Grid; 4],
}

impl Piece {
    /// Builds a piece from a shape definition.
    ///
    /// Any non-blank character in `shape` marks an occupied cell, a space an
    /// empty one; see `Grid::from_text` for the exact parsing rules.
    pub fn new(name: &str, shape: &str) -> Self {
        let first = Grid::from_text(shape);
        let second = first.rotate();
        let third = second.rotate();
        let fourth = third.rotate();
        let orientations = [first, second, third, fourth];
        debug_assert!(
            orientations
                .iter()
                .all(|o| o.occupied_count() == orientations[0].occupied_count()),
            "rotation must preserve the occupied cell count"
        );
        Self {
            name: name.to_string(),
            orientations,
        }
    }

    /// The piece's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The four orientations, each the previous turned a quarter turn.
    pub fn orientations(&self) -> &[Grid; 4] {
        &self.orientations
    }

    /// Number of cells the piece covers, identical in every orientation.
    pub fn size(&self) -> usize {
        self.orientations[0].occupied_count()
    }
}

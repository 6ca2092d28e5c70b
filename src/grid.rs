//! Rectangular character grid underlying boards and piece shapes.
//!
//! Cells hold a single `char`: a space means empty, anything else means
//! occupied. Dimensions are fixed at construction; `rotate` produces a new
//! grid with the axes swapped instead of mutating in place.

use std::fmt;

/// Cell value meaning "nothing here".
pub const EMPTY: char = ' ';

/// A rectangular grid of character cells.
///
/// All rows have the same length; `from_text` pads short rows and `rotate`
/// builds a fresh rectangle, so the invariant holds everywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Parses a grid from a block of text.
    ///
    /// Any non-blank character marks an occupied cell, a space marks an
    /// empty one. Leading and trailing blank lines are dropped so shape
    /// literals can open and close with a newline, and short rows are padded
    /// with spaces to the width of the longest row.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.first().is_some_and(|line| line.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, EMPTY);
                row
            })
            .collect();
        Self { rows }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the cell at (x, y) holds anything but a space.
    ///
    /// Coordinates must be in bounds. `Board::insert` checks bounds before
    /// calling, so an out-of-range placement fails there as `OutOfBounds`
    /// rather than panicking here.
    #[inline]
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        self.rows[y][x] != EMPTY
    }

    /// Overwrites the cell at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: char) {
        self.rows[y][x] = value;
    }

    /// Returns a new grid turned a quarter turn, with width and height
    /// swapped. The receiver is left untouched.
    ///
    /// New cell (row i, col j) takes the old cell (row j, col width-1-i);
    /// applying this four times restores the original grid.
    pub fn rotate(&self) -> Self {
        let (width, height) = (self.width(), self.height());
        let rows = (0..width)
            .map(|i| (0..height).map(|j| self.rows[j][width - 1 - i]).collect())
            .collect();
        Self { rows }
    }

    /// Counts the cells holding anything but a space.
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }

    /// Row-major occupancy map; the solver uses it to fingerprint states.
    pub(crate) fn occupancy(&self) -> Vec<bool> {
        self.rows
            .iter()
            .flatten()
            .map(|&cell| cell != EMPTY)
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

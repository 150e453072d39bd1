//! Allocating rotations and flips
//!
//! Each transform is a pure coordinate remap over the full extent, produced
//! as a fresh grid with its own storage; the receiver is never mutated and
//! never aliased. Rotations compose a transpose with one axis reversal,
//! flips reverse a single axis in place on the copy.

use ndarray::Axis;

use crate::grid::container::Grid;

impl<T: Clone> Grid<T> {
    /// Rotate 90 degrees clockwise into a new grid
    ///
    /// Dimensions swap: the result has `cols() x rows()` cells, and the
    /// cell at (r, c) holds the old value at (rows - 1 - c, r).
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let mut cells = self.cells.t().to_owned();
        cells.invert_axis(Axis(1));
        Self::from_cells(cells)
    }

    /// Rotate 90 degrees counterclockwise into a new grid
    ///
    /// Dimensions swap, and the cell at (r, c) holds the old value at
    /// (c, cols - 1 - r).
    #[must_use]
    pub fn rotated_counterclockwise(&self) -> Self {
        let mut cells = self.cells.t().to_owned();
        cells.invert_axis(Axis(0));
        Self::from_cells(cells)
    }

    /// Reverse the column order of every row into a new grid
    #[must_use]
    pub fn flipped_horizontally(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.invert_axis(Axis(1));
        Self::from_cells(cells)
    }

    /// Reverse the row order of every column into a new grid
    #[must_use]
    pub fn flipped_vertically(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.invert_axis(Axis(0));
        Self::from_cells(cells)
    }
}

//! Canonical neighbor offsets and enumeration
//!
//! Neighbor queries walk a fixed offset table so the result order is
//! deterministic and testable: orthogonal offsets first (up, down, left,
//! right), then the diagonals when requested. Offsets landing outside the
//! grid are dropped, so edge and corner cells legitimately return fewer
//! than 4 or 8 neighbors. There is no toroidal wraparound.

use crate::error::{GridError, Result};
use crate::grid::container::Grid;

/// 4-connected offsets in canonical order: up, down, left, right
pub const ORTHOGONAL_OFFSETS: [[i32; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Diagonal offsets in canonical order: up-left, up-right, down-left,
/// down-right
pub const DIAGONAL_OFFSETS: [[i32; 2]; 4] = [[-1, -1], [-1, 1], [1, -1], [1, 1]];

impl<T> Grid<T> {
    /// Enumerate the in-bounds neighbors of a cell
    ///
    /// Considers the 4-connected offsets, extended to 8-connected when
    /// `include_diagonals` is set. Results follow the canonical offset
    /// order with out-of-bounds candidates removed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the center coordinate itself
    /// lies outside the current extent.
    pub fn neighbors(&self, row: i32, col: i32, include_diagonals: bool) -> Result<Vec<[i32; 2]>> {
        if !self.is_valid(row, col) {
            return Err(GridError::OutOfBounds {
                position: [row, col],
                dimensions: self.dimensions(),
            });
        }

        let mut found = Vec::with_capacity(if include_diagonals { 8 } else { 4 });
        self.collect_in_bounds(&ORTHOGONAL_OFFSETS, row, col, &mut found);
        if include_diagonals {
            self.collect_in_bounds(&DIAGONAL_OFFSETS, row, col, &mut found);
        }
        Ok(found)
    }

    /// Append offset targets that land inside the extent
    fn collect_in_bounds(
        &self,
        offsets: &[[i32; 2]; 4],
        row: i32,
        col: i32,
        found: &mut Vec<[i32; 2]>,
    ) {
        for [row_step, col_step] in offsets {
            let candidate = [row + row_step, col + col_step];
            if self.is_valid(candidate[0], candidate[1]) {
                found.push(candidate);
            }
        }
    }
}

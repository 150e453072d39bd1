//! Dense grid storage, construction, access, and bulk operations
//!
//! The container owns a fully populated `Array2` of cell values addressed by
//! (row, column) with public coordinates in `i32` world space. Coordinates
//! are validated before every indexed access; bulk operations instead clip
//! the requested region to the current extent and never fail.

use ndarray::Array2;

use crate::error::{GridError, Result};
use crate::grid::region::GridRegion;

/// Dense rectangular container of cell values
///
/// Every cell holds a value at all times; there is no sparse or
/// optional-cell mode. Dimensions are fixed at construction. Mutation
/// happens in place through [`Grid::set`], [`Grid::fill`], and
/// [`Grid::transform`], while the geometric transforms allocate fresh
/// grids and leave the receiver untouched.
///
/// Equality compares dimensions and every cell value; no operation on the
/// container itself requires `T: PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Backing store in row-major logical order
    pub(crate) cells: Array2<T>,

    /// Current grid dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl<T> Grid<T> {
    /// Create a grid with every cell initialized to a copy of `default`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] when either count is
    /// negative.
    pub fn new(rows: i32, cols: i32, default: T) -> Result<Self>
    where
        T: Clone,
    {
        if rows < 0 || cols < 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let dimensions = (rows as usize, cols as usize);
        Ok(Self {
            cells: Array2::from_elem(dimensions, default),
            dimensions,
        })
    }

    /// Create a grid from nested rows in row-major order
    ///
    /// The outer length fixes the row count and the first row fixes the
    /// column count; an empty outer vector produces a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedInput`] when any row's length differs
    /// from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(row_count.saturating_mul(col_count));
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(GridError::RaggedInput {
                    row_index,
                    expected: col_count,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        // Row lengths were validated above, so the only remaining failure
        // is a rows * cols overflow of usize
        match Array2::from_shape_vec((row_count, col_count), data) {
            Ok(cells) => Ok(Self {
                cells,
                dimensions: (row_count, col_count),
            }),
            Err(_) => Err(GridError::InvalidDimensions {
                rows: row_count as i32,
                cols: col_count as i32,
            }),
        }
    }

    /// Wrap an already shaped backing store
    pub(crate) fn from_cells(cells: Array2<T>) -> Self {
        let dimensions = cells.dim();
        Self { cells, dimensions }
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Current grid dimensions (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Total number of cells (rows x cols)
    pub const fn len(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Whether the grid holds no cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a coordinate lies inside the current extent
    ///
    /// The non-failing counterpart to [`Grid::get`] for callers probing
    /// before access. Never clamps and never wraps.
    pub const fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.dimensions.0
            && (col as usize) < self.dimensions.1
    }

    /// Read the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the coordinate is outside
    /// the current extent.
    pub fn get(&self, row: i32, col: i32) -> Result<&T> {
        let index = self.checked_index(row, col)?;
        self.cells.get(index).ok_or_else(|| GridError::OutOfBounds {
            position: [row, col],
            dimensions: self.dimensions,
        })
    }

    /// Replace the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the coordinate is outside
    /// the current extent.
    pub fn set(&mut self, row: i32, col: i32, value: T) -> Result<()> {
        let index = self.checked_index(row, col)?;
        let dimensions = self.dimensions;
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| GridError::OutOfBounds {
                position: [row, col],
                dimensions,
            })?;
        *cell = value;
        Ok(())
    }

    /// Set every cell inside the intersection of `region` and the grid
    ///
    /// Coordinates of the region outside the current extent are silently
    /// skipped; a fully disjoint region is a no-op. Regions are meant to be
    /// computed speculatively and reused, so clipping is the contract here,
    /// not a failure.
    #[allow(clippy::needless_pass_by_value)]
    pub fn fill(&mut self, value: T, region: GridRegion)
    where
        T: Clone,
    {
        let (row_span, col_span) = region.clip(self.rows(), self.cols());
        for row in row_span {
            for col in col_span.clone() {
                if let Some(cell) = self.cells.get_mut((row, col)) {
                    *cell = value.clone();
                }
            }
        }
    }

    /// Replace every cell inside the clipped region with `apply(current)`
    ///
    /// Same clipping policy as [`Grid::fill`]. `apply` is expected to be a
    /// pure function of the current value.
    pub fn transform<F>(&mut self, region: GridRegion, apply: F)
    where
        F: Fn(&T) -> T,
    {
        let (row_span, col_span) = region.clip(self.rows(), self.cols());
        for row in row_span {
            for col in col_span.clone() {
                if let Some(cell) = self.cells.get_mut((row, col)) {
                    let next = apply(cell);
                    *cell = next;
                }
            }
        }
    }

    /// Visit every cell in row-major order
    ///
    /// Rows ascend in the outer loop and columns in the inner loop. The
    /// order is a guaranteed contract so callers can build deterministic
    /// snapshots from it.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(i32, i32, &T),
    {
        for ((row, col), value) in self.cells.indexed_iter() {
            visit(row as i32, col as i32, value);
        }
    }

    /// Deep row-major snapshot as nested vectors
    ///
    /// The result holds independent copies, never aliases the backing
    /// store, and round trips through [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().cloned().collect())
            .collect()
    }

    /// Validate a coordinate and convert it to a store index
    const fn checked_index(&self, row: i32, col: i32) -> Result<(usize, usize)> {
        if self.is_valid(row, col) {
            Ok((row as usize, col as usize))
        } else {
            Err(GridError::OutOfBounds {
                position: [row, col],
                dimensions: self.dimensions,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::error::GridError;

    #[test]
    fn test_sized_constructor_rejects_negative_counts() {
        assert_eq!(
            Grid::new(-1, 3, 0_i32),
            Err(GridError::InvalidDimensions { rows: -1, cols: 3 })
        );
        assert_eq!(
            Grid::new(3, -1, 0_i32),
            Err(GridError::InvalidDimensions { rows: 3, cols: -1 })
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert_eq!(
            Grid::from_rows(vec![vec![1, 2], vec![3]]),
            Err(GridError::RaggedInput {
                row_index: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_zero_extent_grids_are_empty() {
        let Ok(grid) = Grid::new(0, 0, 0_u8) else {
            unreachable!("zero extent is valid");
        };
        assert_eq!(grid.len(), 0);
        assert!(grid.is_empty());
        assert!(!grid.is_valid(0, 0));
    }

    #[test]
    fn test_is_valid_matches_extent() {
        let Ok(grid) = Grid::new(2, 3, 0_u8) else {
            unreachable!("dimensions are valid");
        };
        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(1, 2));
        assert!(!grid.is_valid(-1, 0));
        assert!(!grid.is_valid(0, 3));
        assert!(!grid.is_valid(2, 0));
    }
}

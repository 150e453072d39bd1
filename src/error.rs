//! Error types for grid construction and access

use std::fmt;

/// Main error type for all grid operations
///
/// Every variant is a local, synchronous precondition violation reported to
/// the immediate caller. Clipped bulk operations (`fill`, `transform`) never
/// produce errors; a region falling partly or wholly outside the grid is
/// intersected with the extent instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Negative row or column count supplied to the sized constructor
    InvalidDimensions {
        /// Requested row count
        rows: i32,
        /// Requested column count
        cols: i32,
    },

    /// Nested-row constructor given rows of unequal length
    RaggedInput {
        /// Index of the first offending row
        row_index: usize,
        /// Length of the first row, which fixes the column count
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Coordinate outside the current grid extent
    OutOfBounds {
        /// The rejected (row, column) coordinate
        position: [i32; 2],
        /// Current grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid grid dimensions {rows}x{cols}: counts must be non-negative")
            }
            Self::RaggedInput {
                row_index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row_index} has {actual} cells but expected {expected}"
                )
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is out of bounds (grid size {}x{})",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

//! Dense generic two-dimensional grid container with bounds-checked access,
//! clipped region operations, neighbor enumeration, and geometric transforms
//!
//! A [`Grid`] owns a fully populated rectangular store of cells addressed by
//! (row, column). Regions are plain coordinate descriptors validated lazily
//! at the point of use, so bulk operations clip to the grid extent instead of
//! failing. Rotations and flips allocate fresh grids and never alias the
//! source storage.

#![forbid(unsafe_code)]

/// Error types for grid construction and access
pub mod error;
/// Grid container, region descriptors, neighbor queries, and transforms
pub mod grid;

pub use error::{GridError, Result};
pub use grid::{Grid, GridRegion};

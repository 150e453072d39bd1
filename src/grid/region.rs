//! Rectangular region descriptors and clipping
//!
//! A region is a passive coordinate rectangle with no back-reference to any
//! grid. Construction never validates against bounds; the intersection with
//! a concrete extent is computed by [`GridRegion::clip`] at the point of
//! use, so a region computed once stays reusable across grids of different
//! sizes.

use std::ops::Range;

/// Rectangular sub-area descriptor (origin plus extent)
///
/// The origin may lie anywhere, including outside any particular grid;
/// height and width are non-negative by type. Consumers re-check validity
/// through [`GridRegion::clip`], the descriptor itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRegion {
    /// First row of the rectangle (inclusive), any value
    pub start_row: i32,
    /// First column of the rectangle (inclusive), any value
    pub start_col: i32,
    /// Number of rows covered
    pub height: usize,
    /// Number of columns covered
    pub width: usize,
}

impl GridRegion {
    /// Describe a rectangle without validating it against any bounds
    pub const fn new(start_row: i32, start_col: i32, height: usize, width: usize) -> Self {
        Self {
            start_row,
            start_col,
            height,
            width,
        }
    }

    /// Intersect the rectangle with a (rows, cols) extent
    ///
    /// Returns index ranges for iteration. A rectangle fully outside the
    /// extent yields empty ranges.
    pub const fn clip(&self, rows: usize, cols: usize) -> (Range<usize>, Range<usize>) {
        (
            clip_axis(self.start_row, self.height, rows),
            clip_axis(self.start_col, self.width, cols),
        )
    }
}

/// Clamp one axis of a rectangle to `0..limit`
const fn clip_axis(start: i32, extent: usize, limit: usize) -> Range<usize> {
    let raw_start = if start < 0 { 0 } else { start as usize };
    let begin = if raw_start > limit { limit } else { raw_start };

    // Signed end handles rectangles entirely left of / above the origin;
    // extents beyond i64 saturate instead of wrapping
    let extent_signed = if extent > i64::MAX as usize {
        i64::MAX
    } else {
        extent as i64
    };
    let end_signed = (start as i64).saturating_add(extent_signed);
    let raw_end = if end_signed < 0 { 0 } else { end_signed as usize };
    let end = if raw_end > limit { limit } else { raw_end };

    begin..end
}

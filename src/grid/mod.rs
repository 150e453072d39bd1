//! Grid container and its supporting spatial types
//!
//! This module groups the container itself with the pieces that operate on
//! its coordinate space:
//! - The dense `Grid` store with bounds-checked access and bulk operations
//! - Passive `GridRegion` descriptors clipped lazily at the point of use
//! - Neighbor enumeration over canonical 4- and 8-connected offsets
//! - Allocating geometric transforms (rotations and flips)

/// Dense grid storage, construction, access, and bulk operations
pub mod container;
/// Serde encoding of grids as self-describing documents
#[cfg(feature = "serde")]
pub mod encode;
/// Canonical neighbor offsets and enumeration
pub mod neighbors;
/// Rectangular region descriptors and clipping
pub mod region;
/// Allocating rotations and flips
pub mod transform;

pub use container::Grid;
pub use region::GridRegion;

//! Format descriptors and band structure arithmetic
//!
//! Pure definitions with no storage attached: orientation of compressed
//! arrays, element type tags and the bound math behind masking views.

pub mod band;
pub mod structure;

pub use band::BandMask;
pub use structure::{DataType, MatrixFormat};

/// Column-major linear index of `(row, col)` in a structure with `structure` rows
#[inline]
pub const fn index(structure: usize, row: usize, col: usize) -> usize {
    row + col * structure
}

/// Inverse of [`index`]: the `(row, col)` of a column-major linear index
#[inline]
pub const fn coordinates(structure: usize, index: usize) -> (usize, usize) {
    (index % structure, index / structure)
}

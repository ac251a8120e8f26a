//! Triplet accumulation and compressed sparse storage
//!
//! [`SparseBuilder`] collects `(row, col, value)` entries and compresses
//! them into a [`CompressedSparse`] container in CSR or CSC orientation with
//! a single counting-sort pass.

pub mod builder;
pub mod compressed;

pub use builder::{SparseBuilder, Triplet};
pub use compressed::{CompressedSparse, ToCompressed};

//! mview - Non-copying Matrix Views and Sparse Compression
//!
//! This library provides lightweight views that reinterpret a base matrix
//! without copying it, and a triplet builder that compresses entries into
//! CSR or CSC storage.
//!
//! ## Architecture
//!
//! mview follows a contract/implementation separation:
//!
//! - **mview-core**: Element contract, view and receiver traits, band masks
//!   and validation (no_std, no allocation required)
//! - **mview**: Concrete views, dense and compressed containers
//!
//! ## Quick Start
//!
//! ```rust
//! use mview::{
//!     BandMask, DenseMatrix, MatrixFormat, MatrixView, SparseBuilder, SparseStructure, ViewExt,
//! };
//!
//! fn example() -> mview::Result<()> {
//!     let dense = DenseMatrix::from_fn(4, 4, |row, col| (row + col) as f64);
//!
//!     // Views nest; bulk copies only visit the band
//!     let view = (&dense).masked(BandMask::upper_triangular()).clipped(3, 3);
//!     let copy = DenseMatrix::copy_of(&view);
//!     assert_eq!(copy.get(2, 0), 0.0);
//!
//!     // Triplets compress into CSR or CSC
//!     let mut builder = SparseBuilder::new(3, 3, MatrixFormat::Csr)?;
//!     builder.set(0, 0, 5.0)?;
//!     builder.set(1, 2, 3.0)?;
//!     let csr = builder.build();
//!     assert_eq!(csr.count_nonzeros(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Band masks**: triangular, unit-triangular, Hessenberg, diagonal, banded
//! - **Reflection**: symmetric and Hermitian completion of a stored triangle
//! - **Conjugate products**: `A^H * B^H` rewritten as `(B * A)^H`
//! - **Broadcast and clip**: row/column repetition, leading blocks
//! - **Sparse compression**: counting-sort CSR/CSC with duplicate policies

// Re-export core abstractions
pub use mview_core::{
    // Core traits
    Access1D, MatrixElement, MatrixView, Receiver, ScalarFactory, SparseStructure,
    // Algebraic scalars
    ElementFactory, Scalar,
    // Format definitions
    BandMask, DataType, MatrixFormat,
    // Error handling
    MviewError, Result,
    // Linear addressing
    coordinates, index,
};

// Complex element types implementing `MatrixElement`
pub use num_complex::{Complex32, Complex64};

// Implementation modules
pub mod config;
pub mod dense;
pub mod product;
pub mod sparse;
pub mod views;

// Public exports
pub use config::{BuilderConfig, DuplicatePolicy};
pub use dense::DenseMatrix;
pub use product::Product;
pub use sparse::{CompressedSparse, SparseBuilder, ToCompressed, Triplet};
pub use views::{
    Axis, BroadcastView, CastView, ClipView, ColumnView, ConjugateView, MaskedView,
    SymmetricView, TransposeView, Triangle, ViewExt,
};

//! Abstract interfaces for matrix views
//!
//! This module defines all trait abstractions shared by views, receivers
//! and sparse structures. Traits are pure interfaces with default methods
//! only; concrete views live in the `mview` crate.

pub mod element;
pub mod receiver;
pub mod sparse;
pub mod view;

pub use element::MatrixElement;
pub use receiver::Receiver;
pub use sparse::SparseStructure;
pub use view::{Access1D, ColumnSlice, MatrixView, RowSlice};

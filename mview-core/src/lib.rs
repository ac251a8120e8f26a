#![no_std]

//! mview Core - Matrix View Contracts
//!
//! This crate provides the element contract, the read/receive traits every
//! matrix view implements, band-mask bound arithmetic and pure validation
//! for compressed sparse layouts. Concrete views live in `mview`.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod scalar;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{coordinates, index, BandMask, DataType, MatrixFormat};
pub use scalar::{ElementFactory, Scalar, ScalarFactory};
pub use traits::*;

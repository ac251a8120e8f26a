//! Matrix element type constraints
//!
//! Every element read is available in three forms that must agree: the
//! element value itself, its primitive `f64` approximation and the
//! algebraic [`Scalar`](crate::Scalar) wrapper. This module defines the
//! element contract those forms are derived from.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::{One, Zero};

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// Elements must be plain data (`bytemuck::Pod`) so compressed value arrays
/// can be exposed as raw bytes, and must support the ring operations used
/// by dense products.
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + bytemuck::Pod
    + Send
    + Sync
    + 'static
{
    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Primitive approximation of the value
    ///
    /// Complex elements report their real part, which conjugation leaves
    /// unchanged.
    fn to_f64(self) -> f64;

    /// Complex conjugate, the identity for real types
    fn conjugate(self) -> Self;
}

impl MatrixElement for f32 {
    fn data_type() -> DataType {
        DataType::F32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn conjugate(self) -> Self {
        self
    }
}

impl MatrixElement for f64 {
    fn data_type() -> DataType {
        DataType::F64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn conjugate(self) -> Self {
        self
    }
}

impl MatrixElement for Complex<f32> {
    fn data_type() -> DataType {
        DataType::C32
    }

    fn from_f64(value: f64) -> Self {
        Complex::new(value as f32, 0.0)
    }

    fn to_f64(self) -> f64 {
        self.re as f64
    }

    #[inline]
    fn conjugate(self) -> Self {
        self.conj()
    }
}

impl MatrixElement for Complex<f64> {
    fn data_type() -> DataType {
        DataType::C64
    }

    fn from_f64(value: f64) -> Self {
        Complex::new(value, 0.0)
    }

    fn to_f64(self) -> f64 {
        self.re
    }

    #[inline]
    fn conjugate(self) -> Self {
        self.conj()
    }
}

//! Algebraic scalar wrapper and scalar factories

use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::MatrixElement;

/// Algebraic view of a single element
///
/// This is the third access path of every matrix view next to the element
/// value and its `f64` approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Scalar<E>(E);

impl<E: MatrixElement> Scalar<E> {
    #[inline]
    pub fn new(value: E) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(E::zero())
    }

    pub fn one() -> Self {
        Self(E::one())
    }

    /// The wrapped element value
    #[inline]
    pub fn get(self) -> E {
        self.0
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self(self.0.conjugate())
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.to_f64()
    }

    pub fn is_zero(self) -> bool {
        self.0 == E::zero()
    }
}

impl<E: MatrixElement> From<E> for Scalar<E> {
    fn from(value: E) -> Self {
        Self(value)
    }
}

impl<E: MatrixElement> Add for Scalar<E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<E: MatrixElement> Sub for Scalar<E> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<E: MatrixElement> Mul for Scalar<E> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<E: MatrixElement> Neg for Scalar<E> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Produces elements of one scalar type
pub trait ScalarFactory {
    type Element: MatrixElement;

    /// Algebraic zero
    fn zero(&self) -> Self::Element;

    /// Algebraic one
    fn one(&self) -> Self::Element;

    /// Derive an element from a raw numeric value
    fn cast(&self, value: f64) -> Self::Element;

    fn scalar(&self, value: f64) -> Scalar<Self::Element> {
        Scalar::new(self.cast(value))
    }
}

/// Factory for any [`MatrixElement`] type
#[derive(Debug)]
pub struct ElementFactory<E>(PhantomData<E>);

impl<E> ElementFactory<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for ElementFactory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ElementFactory<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ElementFactory<E> {}

impl<E: MatrixElement> ScalarFactory for ElementFactory<E> {
    type Element = E;

    fn zero(&self) -> E {
        E::zero()
    }

    fn one(&self) -> E {
        E::one()
    }

    fn cast(&self, value: f64) -> E {
        E::from_f64(value)
    }
}

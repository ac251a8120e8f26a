//! Symmetric and Hermitian completion of a stored triangle

use mview_core::validation::validate_square;
use mview_core::{MatrixElement, MatrixView, Result, Scalar};

/// Which triangle of the base holds the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Triangle {
    #[default]
    Upper,
    Lower,
}

impl Triangle {
    #[inline]
    const fn contains(self, row: usize, col: usize) -> bool {
        match self {
            Triangle::Upper => row <= col,
            Triangle::Lower => row >= col,
        }
    }
}

/// A square base completed by reflection across the main diagonal
///
/// Cells in the stored triangle read straight from the base. The other
/// triangle reads the mirrored cell, conjugated when the view is Hermitian.
/// The primitive `f64` path is the real part and is never conjugated, so
/// `double_value(r, c) == double_value(c, r)` holds either way.
#[derive(Debug, Clone)]
pub struct SymmetricView<M> {
    base: M,
    stored: Triangle,
    hermitian: bool,
}

impl<M: MatrixView> SymmetricView<M> {
    /// General constructor; fails with `NonSquare` on a rectangular base
    pub fn new(base: M, stored: Triangle, hermitian: bool) -> Result<Self> {
        validate_square(base.nrows(), base.ncols())?;
        Ok(Self {
            base,
            stored,
            hermitian,
        })
    }

    /// Symmetric completion of the upper triangle
    pub fn symmetric(base: M) -> Result<Self> {
        Self::new(base, Triangle::Upper, false)
    }

    /// Hermitian completion of the upper triangle
    pub fn hermitian(base: M) -> Result<Self> {
        Self::new(base, Triangle::Upper, true)
    }

    /// Read the data from `stored` instead
    pub fn with_stored(mut self, stored: Triangle) -> Self {
        self.stored = stored;
        self
    }

    pub fn stored(&self) -> Triangle {
        self.stored
    }

    pub fn is_hermitian(&self) -> bool {
        self.hermitian
    }

    pub fn base(&self) -> &M {
        &self.base
    }
}

impl<M: MatrixView> MatrixView for SymmetricView<M> {
    type Element = M::Element;

    #[inline]
    fn nrows(&self) -> usize {
        self.base.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.base.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> M::Element {
        if self.stored.contains(row, col) {
            return self.base.get(row, col);
        }
        let mirrored = self.base.get(col, row);
        if self.hermitian {
            mirrored.conjugate()
        } else {
            mirrored
        }
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        if self.stored.contains(row, col) {
            self.base.double_value(row, col)
        } else {
            self.base.double_value(col, row)
        }
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<M::Element> {
        if self.stored.contains(row, col) {
            return self.base.to_scalar(row, col);
        }
        let mirrored = self.base.to_scalar(col, row);
        if self.hermitian {
            mirrored.conjugate()
        } else {
            mirrored
        }
    }
}

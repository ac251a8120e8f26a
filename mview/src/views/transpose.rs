//! Transpose and conjugate-transpose views
//!
//! Both swap the roles of rows and columns, bounds included. Asking a
//! [`TransposeView`] for its transpose, or a [`ConjugateView`] for its
//! conjugate, hands back the wrapped base itself rather than nesting.

use mview_core::{MatrixElement, MatrixView, Result, Scalar};

use crate::product::Product;
use crate::DenseMatrix;

/// `(row, col)` reads `base(col, row)`
#[derive(Debug, Clone)]
pub struct TransposeView<M> {
    base: M,
}

impl<M: MatrixView> TransposeView<M> {
    pub fn new(base: M) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    /// Undo the transpose, returning the base unchanged
    pub fn transpose(self) -> M {
        self.base
    }
}

impl<M: MatrixView> MatrixView for TransposeView<M> {
    type Element = M::Element;

    #[inline]
    fn nrows(&self) -> usize {
        self.base.ncols()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.base.nrows()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> M::Element {
        self.base.get(col, row)
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        self.base.double_value(col, row)
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<M::Element> {
        self.base.to_scalar(col, row)
    }

    fn first_in_row(&self, row: usize) -> usize {
        self.base.first_in_column(row)
    }

    fn limit_of_row(&self, row: usize) -> usize {
        self.base.limit_of_column(row)
    }

    fn first_in_column(&self, col: usize) -> usize {
        self.base.first_in_row(col)
    }

    fn limit_of_column(&self, col: usize) -> usize {
        self.base.limit_of_row(col)
    }
}

/// `(row, col)` reads `conjugate(base(col, row))`
#[derive(Debug, Clone)]
pub struct ConjugateView<M> {
    base: M,
}

impl<M: MatrixView> ConjugateView<M> {
    pub fn new(base: M) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    /// Undo the conjugate transpose, returning the base unchanged
    pub fn conjugate(self) -> M {
        self.base
    }

    /// Product `self * rhs`
    ///
    /// When `rhs` is itself a conjugate view, `A^H * B^H` is computed as
    /// `(B * A)^H`: one dense product of the two bases wrapped in a single
    /// new conjugate view. Any other `rhs` takes the dense path.
    pub fn multiply<R>(&self, rhs: &R) -> Result<Product<M::Element>>
    where
        R: MatrixView<Element = M::Element> + ?Sized,
    {
        match rhs.conjugate_base() {
            Some(rhs_base) => {
                let inner = DenseMatrix::multiply(rhs_base, &self.base)?;
                Ok(Product::Conjugated(ConjugateView::new(inner)))
            }
            None => {
                log::debug!(
                    target: "mview_perf",
                    "conjugate product with a {}x{} operand that is not a conjugate view, multiplying densely",
                    rhs.nrows(),
                    rhs.ncols()
                );
                Ok(Product::Dense(DenseMatrix::multiply(self, rhs)?))
            }
        }
    }
}

impl<M: MatrixView> MatrixView for ConjugateView<M> {
    type Element = M::Element;

    #[inline]
    fn nrows(&self) -> usize {
        self.base.ncols()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.base.nrows()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> M::Element {
        self.base.get(col, row).conjugate()
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        self.base.double_value(col, row)
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<M::Element> {
        self.base.to_scalar(col, row).conjugate()
    }

    fn first_in_row(&self, row: usize) -> usize {
        self.base.first_in_column(row)
    }

    fn limit_of_row(&self, row: usize) -> usize {
        self.base.limit_of_column(row)
    }

    fn first_in_column(&self, col: usize) -> usize {
        self.base.first_in_row(col)
    }

    fn limit_of_column(&self, col: usize) -> usize {
        self.base.limit_of_row(col)
    }

    fn conjugate_base(&self) -> Option<&dyn MatrixView<Element = M::Element>> {
        Some(&self.base)
    }
}

//! Read contract shared by every matrix view
//!
//! Views are decorators: each one holds exactly one base and answers
//! queries by walking down to it. Because every view implements the same
//! [`MatrixView`] trait, views nest freely and a bulk copy through
//! [`MatrixView::supply_to`] only visits the cells the innermost bounds allow.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;
use super::receiver::Receiver;
use crate::format::coordinates;
use crate::Scalar;

/// Two-dimensional read contract
///
/// Coordinates outside `[0, nrows) x [0, ncols)` are the caller's
/// responsibility; implementations only check them in debug builds.
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    fn nrows(&self) -> usize;

    fn ncols(&self) -> usize;

    /// Element value at `(row, col)`
    fn get(&self, row: usize, col: usize) -> Self::Element;

    /// Primitive approximation of the element at `(row, col)`
    fn double_value(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).to_f64()
    }

    /// Algebraic scalar at `(row, col)`
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<Self::Element> {
        Scalar::new(self.get(row, col))
    }

    /// Total number of logical cells
    fn count(&self) -> usize {
        self.nrows() * self.ncols()
    }

    /// Element at a column-major linear index
    fn get_linear(&self, index: usize) -> Self::Element {
        let (row, col) = coordinates(self.nrows(), index);
        self.get(row, col)
    }

    fn double_value_linear(&self, index: usize) -> f64 {
        let (row, col) = coordinates(self.nrows(), index);
        self.double_value(row, col)
    }

    /// First column of `row` that may hold a non-zero
    fn first_in_row(&self, _row: usize) -> usize {
        0
    }

    /// One past the last column of `row` that may hold a non-zero
    fn limit_of_row(&self, _row: usize) -> usize {
        self.ncols()
    }

    /// First row of `col` that may hold a non-zero
    fn first_in_column(&self, _col: usize) -> usize {
        0
    }

    /// One past the last row of `col` that may hold a non-zero
    fn limit_of_column(&self, _col: usize) -> usize {
        self.nrows()
    }

    /// Copy every possibly non-zero cell into `receiver`
    ///
    /// The receiver is reset first, then each column `j` is filled over
    /// `[first_in_column(j), limit_of_column(j))`.
    fn supply_to(&self, receiver: &mut dyn Receiver<Self::Element>) {
        receiver.reset();
        for col in 0..self.ncols() {
            for row in self.first_in_column(col)..self.limit_of_column(col) {
                receiver.fill_one(row, col, self.get(row, col));
            }
        }
    }

    /// The un-conjugated base when `self` is a conjugate-transpose view
    fn conjugate_base(&self) -> Option<&dyn MatrixView<Element = Self::Element>> {
        None
    }

    /// Read-only view of one row
    fn row(&self, row: usize) -> RowSlice<'_, Self>
    where
        Self: Sized,
    {
        RowSlice { matrix: self, row }
    }

    /// Read-only view of one column
    fn column(&self, col: usize) -> ColumnSlice<'_, Self>
    where
        Self: Sized,
    {
        ColumnSlice { matrix: self, col }
    }
}

impl<M: MatrixView + ?Sized> MatrixView for &M {
    type Element = M::Element;

    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Self::Element {
        (**self).get(row, col)
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        (**self).double_value(row, col)
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<Self::Element> {
        (**self).to_scalar(row, col)
    }

    fn get_linear(&self, index: usize) -> Self::Element {
        (**self).get_linear(index)
    }

    fn double_value_linear(&self, index: usize) -> f64 {
        (**self).double_value_linear(index)
    }

    fn first_in_row(&self, row: usize) -> usize {
        (**self).first_in_row(row)
    }

    fn limit_of_row(&self, row: usize) -> usize {
        (**self).limit_of_row(row)
    }

    fn first_in_column(&self, col: usize) -> usize {
        (**self).first_in_column(col)
    }

    fn limit_of_column(&self, col: usize) -> usize {
        (**self).limit_of_column(col)
    }

    fn supply_to(&self, receiver: &mut dyn Receiver<Self::Element>) {
        (**self).supply_to(receiver)
    }

    fn conjugate_base(&self) -> Option<&dyn MatrixView<Element = Self::Element>> {
        (**self).conjugate_base()
    }
}

/// One-dimensional read contract
pub trait Access1D {
    type Element: MatrixElement;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Self::Element;

    fn double_value(&self, index: usize) -> f64 {
        self.get(index).to_f64()
    }

    /// Materialize the sequence, reading every element once
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> Vec<Self::Element> {
        (0..self.len()).map(|index| self.get(index)).collect()
    }
}

impl<E: MatrixElement> Access1D for [E] {
    type Element = E;

    #[inline]
    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> E {
        self[index]
    }
}

impl<A: Access1D + ?Sized> Access1D for &A {
    type Element = A::Element;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Self::Element {
        (**self).get(index)
    }

    #[inline]
    fn double_value(&self, index: usize) -> f64 {
        (**self).double_value(index)
    }
}

/// Row `row` of a matrix as a one-dimensional sequence
#[derive(Debug)]
pub struct RowSlice<'a, M> {
    matrix: &'a M,
    row: usize,
}

impl<M: MatrixView> Access1D for RowSlice<'_, M> {
    type Element = M::Element;

    fn len(&self) -> usize {
        self.matrix.ncols()
    }

    #[inline]
    fn get(&self, index: usize) -> Self::Element {
        self.matrix.get(self.row, index)
    }

    #[inline]
    fn double_value(&self, index: usize) -> f64 {
        self.matrix.double_value(self.row, index)
    }
}

/// Column `col` of a matrix as a one-dimensional sequence
#[derive(Debug)]
pub struct ColumnSlice<'a, M> {
    matrix: &'a M,
    col: usize,
}

impl<M: MatrixView> Access1D for ColumnSlice<'_, M> {
    type Element = M::Element;

    fn len(&self) -> usize {
        self.matrix.nrows()
    }

    #[inline]
    fn get(&self, index: usize) -> Self::Element {
        self.matrix.get(index, self.col)
    }

    #[inline]
    fn double_value(&self, index: usize) -> f64 {
        self.matrix.double_value(index, self.col)
    }
}

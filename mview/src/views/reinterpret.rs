//! Dimension and element-type reinterpretation
//!
//! [`ColumnView`] stands a one-dimensional sequence up as an `n x 1`
//! matrix. [`CastView`] re-derives every element of a source matrix through
//! a [`ScalarFactory`], using the source's primitive `f64` value.

use mview_core::{Access1D, MatrixElement, MatrixView, ScalarFactory};

/// An `n x 1` matrix over a sequence of length `n`
#[derive(Debug, Clone)]
pub struct ColumnView<S> {
    sequence: S,
}

impl<S: Access1D> ColumnView<S> {
    pub fn new(sequence: S) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }
}

impl<S: Access1D> MatrixView for ColumnView<S> {
    type Element = S::Element;

    #[inline]
    fn nrows(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    fn ncols(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> S::Element {
        debug_assert_eq!(col, 0);
        self.sequence.get(row)
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        debug_assert_eq!(col, 0);
        self.sequence.double_value(row)
    }

    #[inline]
    fn get_linear(&self, index: usize) -> S::Element {
        self.sequence.get(index)
    }

    #[inline]
    fn double_value_linear(&self, index: usize) -> f64 {
        self.sequence.double_value(index)
    }
}

/// A source matrix re-read through another element factory
#[derive(Debug, Clone)]
pub struct CastView<M, F> {
    base: M,
    factory: F,
}

impl<M: MatrixView, F: ScalarFactory> CastView<M, F> {
    pub fn new(base: M, factory: F) -> Self {
        Self { base, factory }
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<M: MatrixView, F: ScalarFactory> MatrixView for CastView<M, F> {
    type Element = F::Element;

    #[inline]
    fn nrows(&self) -> usize {
        self.base.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.base.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> F::Element {
        self.factory.cast(self.base.double_value(row, col))
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).to_f64()
    }

    fn first_in_row(&self, row: usize) -> usize {
        self.base.first_in_row(row)
    }

    fn limit_of_row(&self, row: usize) -> usize {
        self.base.limit_of_row(row)
    }

    fn first_in_column(&self, col: usize) -> usize {
        self.base.first_in_column(col)
    }

    fn limit_of_column(&self, col: usize) -> usize {
        self.base.limit_of_column(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::assert_consistent;
    use crate::views::{MaskedView, ViewExt};
    use crate::DenseMatrix;
    use mview_core::{index, ElementFactory};
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_column_over_sequence() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0];
        let view = ColumnView::new(&values[..]);

        assert_eq!((view.nrows(), view.ncols()), (5, 1));
        assert_eq!(view.get(2, 0), 4.0);
        assert_eq!(view.get_linear(4), 5.0);
        assert_consistent(&view);
    }

    #[test]
    fn test_column_over_matrix_row() {
        let dense = DenseMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let view = ColumnView::new(dense.row(1));

        assert_eq!(view.nrows(), 3);
        assert_eq!(view.double_value(2, 0), 6.0);
        assert_eq!(DenseMatrix::copy_of(&view).as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_cast_precision() {
        let mut rng = StdRng::seed_from_u64(17);
        let dense = DenseMatrix::from_fn(4, 3, |_, _| rng.gen_range(-10.0..10.0));
        let view = (&dense).cast(ElementFactory::<f32>::new());

        for col in 0..3 {
            for row in 0..4 {
                assert_eq!(view.get(row, col), dense.get(row, col) as f32);
                let linear = index(4, row, col);
                assert_eq!(view.get_linear(linear), dense.as_slice()[linear] as f32);
            }
        }
        assert_consistent(&view);
    }

    #[test]
    fn test_cast_to_complex_keeps_bounds() {
        let dense = DenseMatrix::from_fn(3, 3, |row, col| (row + col) as f64 + 1.0);
        let upper = MaskedView::upper_triangular(&dense);
        let view = CastView::new(&upper, ElementFactory::<Complex64>::new());

        assert_eq!(view.get(0, 2), Complex64::new(3.0, 0.0));
        assert_eq!(view.get(2, 0), Complex64::new(0.0, 0.0));
        assert_eq!(view.first_in_row(2), 2);
        assert_eq!(DenseMatrix::copy_of(&view).get(1, 1), Complex64::new(3.0, 0.0));
        assert_consistent(&view);
    }
}

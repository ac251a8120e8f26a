//! Leading-block clipping

use mview_core::{MatrixView, Scalar};

/// The leading `nrows x ncols` block of a base view
///
/// Requested extents larger than the base are clamped to the base.
#[derive(Debug, Clone)]
pub struct ClipView<M> {
    base: M,
    nrows: usize,
    ncols: usize,
}

impl<M: MatrixView> ClipView<M> {
    pub fn new(nrows: usize, ncols: usize, base: M) -> Self {
        Self {
            nrows: nrows.min(base.nrows()),
            ncols: ncols.min(base.ncols()),
            base,
        }
    }

    pub fn base(&self) -> &M {
        &self.base
    }
}

impl<M: MatrixView> MatrixView for ClipView<M> {
    type Element = M::Element;

    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> M::Element {
        self.base.get(row, col)
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        self.base.double_value(row, col)
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<M::Element> {
        self.base.to_scalar(row, col)
    }

    fn first_in_row(&self, row: usize) -> usize {
        self.base.first_in_row(row)
    }

    fn limit_of_row(&self, row: usize) -> usize {
        self.base.limit_of_row(row).min(self.ncols)
    }

    fn first_in_column(&self, col: usize) -> usize {
        self.base.first_in_column(col)
    }

    fn limit_of_column(&self, col: usize) -> usize {
        self.base.limit_of_column(col).min(self.nrows)
    }
}

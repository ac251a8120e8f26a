//! Band masking: triangular, Hessenberg, diagonal and general band views
//!
//! Every mask shape is a [`BandMask`]. Cells outside the band read as zero,
//! and a unit-diagonal mask reads one on the main diagonal regardless of
//! the base. Bounds are the band's bounds intersected with the base's, so
//! nested masks only ever narrow the visited region.

use mview_core::{BandMask, MatrixView, Scalar};
use num_traits::{One, Zero};

/// A base view seen through a band mask
#[derive(Debug, Clone)]
pub struct MaskedView<M> {
    base: M,
    mask: BandMask,
}

impl<M: MatrixView> MaskedView<M> {
    pub fn new(base: M, mask: BandMask) -> Self {
        Self { base, mask }
    }

    /// Zero below the main diagonal
    pub fn upper_triangular(base: M) -> Self {
        Self::new(base, BandMask::upper_triangular())
    }

    /// Zero above the main diagonal
    pub fn lower_triangular(base: M) -> Self {
        Self::new(base, BandMask::lower_triangular())
    }

    pub fn unit_upper_triangular(base: M) -> Self {
        Self::new(base, BandMask::unit_upper_triangular())
    }

    pub fn unit_lower_triangular(base: M) -> Self {
        Self::new(base, BandMask::unit_lower_triangular())
    }

    /// Zero below the first subdiagonal
    pub fn upper_hessenberg(base: M) -> Self {
        Self::new(base, BandMask::upper_hessenberg())
    }

    /// Zero above the first superdiagonal
    pub fn lower_hessenberg(base: M) -> Self {
        Self::new(base, BandMask::lower_hessenberg())
    }

    pub fn diagonal(base: M) -> Self {
        Self::new(base, BandMask::diagonal())
    }

    /// `lower` subdiagonals and `upper` superdiagonals
    pub fn banded(base: M, lower: usize, upper: usize) -> Self {
        Self::new(base, BandMask::banded(lower, upper))
    }

    pub fn mask(&self) -> BandMask {
        self.mask
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    pub fn into_inner(self) -> M {
        self.base
    }

    #[inline]
    fn is_unit(&self, row: usize, col: usize) -> bool {
        row == col && self.mask.is_unit_diagonal()
    }

    /// Widen `[first, limit)` so it covers the forced diagonal cell `at`
    #[inline]
    fn cover_diagonal(
        &self,
        first: usize,
        limit: usize,
        at: usize,
        extent: usize,
    ) -> (usize, usize) {
        if self.mask.is_unit_diagonal() && at < extent {
            (first.min(at), limit.max(at + 1))
        } else {
            (first, limit)
        }
    }

    fn row_bounds(&self, row: usize) -> (usize, usize) {
        let ncols = self.ncols();
        let first = self.mask.first_in_row(row).max(self.base.first_in_row(row));
        let limit = self
            .mask
            .limit_of_row(row, ncols)
            .min(self.base.limit_of_row(row));
        self.cover_diagonal(first, limit, row, ncols)
    }

    fn column_bounds(&self, col: usize) -> (usize, usize) {
        let nrows = self.nrows();
        let first = self
            .mask
            .first_in_column(col)
            .max(self.base.first_in_column(col));
        let limit = self
            .mask
            .limit_of_column(col, nrows)
            .min(self.base.limit_of_column(col));
        self.cover_diagonal(first, limit, col, nrows)
    }
}

impl<M: MatrixView> MatrixView for MaskedView<M> {
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
        if self.is_unit(row, col) {
            M::Element::one()
        } else if self.mask.admits(row, col) {
            self.base.get(row, col)
        } else {
            M::Element::zero()
        }
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        if self.is_unit(row, col) {
            1.0
        } else if self.mask.admits(row, col) {
            self.base.double_value(row, col)
        } else {
            0.0
        }
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<M::Element> {
        if self.is_unit(row, col) {
            Scalar::one()
        } else if self.mask.admits(row, col) {
            self.base.to_scalar(row, col)
        } else {
            Scalar::zero()
        }
    }

    fn first_in_row(&self, row: usize) -> usize {
        self.row_bounds(row).0
    }

    fn limit_of_row(&self, row: usize) -> usize {
        self.row_bounds(row).1
    }

    fn first_in_column(&self, col: usize) -> usize {
        self.column_bounds(col).0
    }

    fn limit_of_column(&self, col: usize) -> usize {
        self.column_bounds(col).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{assert_bounds_cover, assert_consistent, CountingReceiver};
    use crate::views::ViewExt;
    use crate::{DenseMatrix, SparseBuilder};
    use mview_core::MatrixFormat;
    use num_complex::Complex64;

    fn filled(nrows: usize, ncols: usize) -> DenseMatrix<f64> {
        DenseMatrix::from_fn(nrows, ncols, |row, col| (10 * row + col) as f64 + 1.0)
    }

    #[test]
    fn test_unit_upper_triangular() {
        let dense = DenseMatrix::from_rows(&[&[2.0, 3.0], &[4.0, 5.0]]).unwrap();
        let view = MaskedView::unit_upper_triangular(&dense);

        assert_eq!(view.double_value(0, 0), 1.0);
        assert_eq!(view.double_value(0, 1), 3.0);
        assert_eq!(view.double_value(1, 0), 0.0);
        assert_eq!(view.double_value(1, 1), 1.0);
        assert_consistent(&view);
    }

    #[test]
    fn test_hessenberg_bounds() {
        let dense = filled(5, 5);

        let lower = MaskedView::lower_hessenberg(&dense);
        assert_eq!(lower.limit_of_row(0), 2);
        assert_eq!(lower.limit_of_row(2), 4);
        assert_eq!(lower.limit_of_row(4), 5);
        assert_eq!(lower.get(0, 2), 0.0);
        assert_eq!(lower.get(0, 1), 2.0);

        let upper = MaskedView::upper_hessenberg(&dense);
        assert_eq!(upper.first_in_row(3), 2);
        assert_eq!(upper.first_in_column(1), 0);
        assert_eq!(upper.limit_of_column(1), 3);
        assert_eq!(upper.get(3, 1), 0.0);
        assert_eq!(upper.get(2, 1), 22.0);

        assert_bounds_cover(&lower);
        assert_bounds_cover(&upper);
    }

    #[test]
    fn test_triangular_first_in_row() {
        let dense = filled(4, 6);
        let view = MaskedView::upper_triangular(&dense);
        for row in 0..4 {
            assert_eq!(view.first_in_row(row), row);
        }
        assert_bounds_cover(&view);
    }

    #[test]
    fn test_bound_tightness() {
        let dense = filled(7, 5);
        let masks = [
            BandMask::upper_triangular(),
            BandMask::lower_triangular(),
            BandMask::unit_upper_triangular(),
            BandMask::upper_hessenberg(),
            BandMask::lower_hessenberg(),
            BandMask::diagonal(),
            BandMask::banded(2, 1),
        ];

        for mask in masks {
            let view = MaskedView::new(&dense, mask);
            let mut receiver = CountingReceiver::default();
            view.supply_to(&mut receiver);

            assert_eq!(receiver.resets, 1);
            assert_eq!(receiver.cells, mask.admissible_cells(7, 5), "{mask:?}");
            assert_bounds_cover(&view);
        }
    }

    #[test]
    fn test_nested_masks_narrow() {
        let dense = filled(5, 5);
        let view = (&dense)
            .masked(BandMask::upper_triangular())
            .masked(BandMask::lower_triangular());

        for col in 0..5 {
            assert_eq!(view.first_in_column(col), col);
            assert_eq!(view.limit_of_column(col), col + 1);
        }

        let materialized = DenseMatrix::copy_of(&view);
        let expected = DenseMatrix::from_fn(5, 5, |row, col| {
            if row == col {
                dense.get(row, col)
            } else {
                0.0
            }
        });
        assert_eq!(materialized, expected);
    }

    #[test]
    fn test_unit_diagonal_survives_narrow_base() {
        let mut builder = SparseBuilder::new(4, 4, MatrixFormat::Csc).unwrap();
        builder.set(3, 0, 6.0).unwrap();
        builder.set(2, 1, 7.0).unwrap();
        let strictly_lower = builder.build();
        assert_eq!(strictly_lower.first_in_column(0), 3);

        let unit = MaskedView::unit_lower_triangular(&strictly_lower);
        let materialized = DenseMatrix::copy_of(&unit);
        let expected = DenseMatrix::from_rows(&[
            &[1.0, 0.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0, 0.0],
            &[0.0, 7.0, 1.0, 0.0],
            &[6.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_eq!(materialized, expected);
        assert_bounds_cover(&unit);
    }

    #[test]
    fn test_complex_mask_consistency() {
        let dense = DenseMatrix::from_fn(3, 3, |row, col| Complex64::new(row as f64, col as f64));
        let view = MaskedView::unit_lower_triangular(&dense);
        assert_eq!(view.get(1, 1), Complex64::new(1.0, 0.0));
        assert_eq!(view.get(0, 2), Complex64::new(0.0, 0.0));
        assert_eq!(view.get(2, 0), Complex64::new(2.0, 0.0));
        assert_consistent(&view);
    }
}

//! Logical views over a base matrix
//!
//! Every view owns exactly one base (often a `&M` borrow) and implements
//! [`MatrixView`] itself, so views nest freely:
//!
//! ```rust
//! use mview::{BandMask, DenseMatrix, MatrixView, ViewExt};
//!
//! let dense = DenseMatrix::from_fn(4, 4, |row, col| (row * 4 + col) as f64);
//! let view = (&dense).transpose().masked(BandMask::upper_triangular());
//!
//! assert_eq!(view.get(0, 1), 4.0);
//! assert_eq!(view.get(1, 0), 0.0);
//! ```

pub mod broadcast;
pub mod clip;
pub mod masked;
pub mod reflect;
pub mod reinterpret;
pub mod transpose;

pub use broadcast::{Axis, BroadcastView};
pub use clip::ClipView;
pub use masked::MaskedView;
pub use reflect::{SymmetricView, Triangle};
pub use reinterpret::{CastView, ColumnView};
pub use transpose::{ConjugateView, TransposeView};

use mview_core::{BandMask, MatrixView, Result, ScalarFactory};

/// Chaining constructors for every view
///
/// Implemented for all [`MatrixView`] types. Call through a reference to
/// keep ownership of the base: `(&dense).transpose()`.
pub trait ViewExt: MatrixView + Sized {
    fn transpose(self) -> TransposeView<Self> {
        TransposeView::new(self)
    }

    /// Conjugate transpose
    fn conjugate(self) -> ConjugateView<Self> {
        ConjugateView::new(self)
    }

    fn masked(self, mask: BandMask) -> MaskedView<Self> {
        MaskedView::new(self, mask)
    }

    /// Complete the upper triangle into a symmetric matrix
    fn symmetric(self) -> Result<SymmetricView<Self>> {
        SymmetricView::symmetric(self)
    }

    /// Complete the upper triangle into a Hermitian matrix
    fn hermitian(self) -> Result<SymmetricView<Self>> {
        SymmetricView::hermitian(self)
    }

    fn repeat_rows(self, repetitions: usize) -> Result<BroadcastView<Self>> {
        BroadcastView::rows(self, repetitions)
    }

    fn repeat_columns(self, repetitions: usize) -> Result<BroadcastView<Self>> {
        BroadcastView::columns(self, repetitions)
    }

    fn clipped(self, nrows: usize, ncols: usize) -> ClipView<Self> {
        ClipView::new(nrows, ncols, self)
    }

    fn cast<F: ScalarFactory>(self, factory: F) -> CastView<Self, F> {
        CastView::new(self, factory)
    }
}

impl<M: MatrixView> ViewExt for M {}

#[cfg(test)]
pub(crate) mod testing {
    use mview_core::{index, MatrixElement, MatrixView, Receiver};

    /// Receiver that records how it was driven
    #[derive(Debug, Default)]
    pub struct CountingReceiver {
        pub resets: usize,
        pub cells: usize,
        pub rows: usize,
        pub columns: usize,
    }

    impl<E: MatrixElement> Receiver<E> for CountingReceiver {
        fn reset(&mut self) {
            self.resets += 1;
        }

        fn set(&mut self, _row: usize, _col: usize, _value: f64) {
            self.cells += 1;
        }

        fn fill_one(&mut self, _row: usize, _col: usize, _value: E) {
            self.cells += 1;
        }

        fn fill_row(&mut self, _row: usize, values: &[E]) {
            self.rows += 1;
            self.cells += values.len();
        }

        fn fill_column(&mut self, _col: usize, values: &[E]) {
            self.columns += 1;
            self.cells += values.len();
        }
    }

    /// Check that the element, primitive, scalar and linear paths agree
    pub fn assert_consistent<M: MatrixView>(view: &M) {
        for col in 0..view.ncols() {
            for row in 0..view.nrows() {
                let value = view.get(row, col);
                assert_eq!(view.double_value(row, col), value.to_f64(), "({row}, {col})");
                assert_eq!(view.to_scalar(row, col).get(), value, "({row}, {col})");

                let linear = index(view.nrows(), row, col);
                assert_eq!(view.get_linear(linear), value, "linear {linear}");
                assert_eq!(view.double_value_linear(linear), value.to_f64());
            }
        }
    }

    /// Check that no cell outside the reported bounds is non-zero
    pub fn assert_bounds_cover<M: MatrixView>(view: &M) {
        let zero = <M::Element as num_traits::Zero>::zero();
        for col in 0..view.ncols() {
            let rows = view.first_in_column(col)..view.limit_of_column(col);
            for row in 0..view.nrows() {
                let cols = view.first_in_row(row)..view.limit_of_row(row);
                if view.get(row, col) != zero {
                    assert!(rows.contains(&row), "({row}, {col}) outside column bounds");
                    assert!(cols.contains(&col), "({row}, {col}) outside row bounds");
                }
            }
        }
    }
}

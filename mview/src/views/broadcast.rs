//! Row and column repetition
//!
//! A broadcast view stacks `k` copies of its base vertically ([`Axis::Rows`])
//! or horizontally ([`Axis::Columns`]). Bulk copies read every base row or
//! column once and write it to all `k` destinations.

use mview_core::validation::validate_repetitions;
use mview_core::{Access1D, MatrixView, Receiver, Result, Scalar};

/// Axis along which the base is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// `k` stacked copies of a base view
#[derive(Debug, Clone)]
pub struct BroadcastView<M> {
    base: M,
    axis: Axis,
    repetitions: usize,
    nrows: usize,
    ncols: usize,
}

impl<M: MatrixView> BroadcastView<M> {
    /// Repeat the rows of `base` `repetitions` times
    pub fn rows(base: M, repetitions: usize) -> Result<Self> {
        let nrows = validate_repetitions(base.nrows(), repetitions)?;
        let ncols = base.ncols();
        Ok(Self {
            base,
            axis: Axis::Rows,
            repetitions,
            nrows,
            ncols,
        })
    }

    /// Repeat the columns of `base` `repetitions` times
    pub fn columns(base: M, repetitions: usize) -> Result<Self> {
        let ncols = validate_repetitions(base.ncols(), repetitions)?;
        let nrows = base.nrows();
        Ok(Self {
            base,
            axis: Axis::Columns,
            repetitions,
            nrows,
            ncols,
        })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    #[inline]
    fn source(&self, row: usize, col: usize) -> (usize, usize) {
        match self.axis {
            Axis::Rows => (row % self.base.nrows(), col),
            Axis::Columns => (row, col % self.base.ncols()),
        }
    }
}

impl<M: MatrixView> MatrixView for BroadcastView<M> {
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
        let (row, col) = self.source(row, col);
        self.base.get(row, col)
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        let (row, col) = self.source(row, col);
        self.base.double_value(row, col)
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<M::Element> {
        let (row, col) = self.source(row, col);
        self.base.to_scalar(row, col)
    }

    fn first_in_row(&self, row: usize) -> usize {
        match self.axis {
            Axis::Rows => self.base.first_in_row(row % self.base.nrows()),
            Axis::Columns => 0,
        }
    }

    fn limit_of_row(&self, row: usize) -> usize {
        match self.axis {
            Axis::Rows => self.base.limit_of_row(row % self.base.nrows()),
            Axis::Columns => self.ncols,
        }
    }

    fn first_in_column(&self, col: usize) -> usize {
        match self.axis {
            Axis::Rows => 0,
            Axis::Columns => self.base.first_in_column(col % self.base.ncols()),
        }
    }

    fn limit_of_column(&self, col: usize) -> usize {
        match self.axis {
            Axis::Rows => self.nrows,
            Axis::Columns => self.base.limit_of_column(col % self.base.ncols()),
        }
    }

    fn supply_to(&self, receiver: &mut dyn Receiver<M::Element>) {
        receiver.reset();
        match self.axis {
            Axis::Rows => {
                let base_rows = self.base.nrows();
                for row in 0..base_rows {
                    let values = self.base.row(row).to_vec();
                    for rep in 0..self.repetitions {
                        receiver.fill_row(row + base_rows * rep, &values);
                    }
                }
            }
            Axis::Columns => {
                let base_cols = self.base.ncols();
                for col in 0..base_cols {
                    let values = self.base.column(col).to_vec();
                    for rep in 0..self.repetitions {
                        receiver.fill_column(col + base_cols * rep, &values);
                    }
                }
            }
        }
    }
}

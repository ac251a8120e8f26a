//! Bulk-copy sink for view materialization
//!
//! A receiver is the write side of [`MatrixView::supply_to`]: views push
//! cells, whole rows or whole columns into it. Receivers must be reset
//! before a fresh fill since views only push the cells their bounds allow.
//!
//! [`MatrixView::supply_to`]: super::MatrixView::supply_to

use super::element::MatrixElement;

/// Trait for destinations of a bulk fill
pub trait Receiver<E: MatrixElement> {
    /// Clear every cell back to zero
    fn reset(&mut self);

    /// Store a primitive value at `(row, col)`
    fn set(&mut self, row: usize, col: usize, value: f64);

    /// Store an element at `(row, col)`
    fn fill_one(&mut self, row: usize, col: usize, value: E);

    /// Store `values[j]` at `(row, j)` for every `j`
    fn fill_row(&mut self, row: usize, values: &[E]) {
        for (col, &value) in values.iter().enumerate() {
            self.fill_one(row, col, value);
        }
    }

    /// Store `values[i]` at `(i, col)` for every `i`
    fn fill_column(&mut self, col: usize, values: &[E]) {
        for (row, &value) in values.iter().enumerate() {
            self.fill_one(row, col, value);
        }
    }
}

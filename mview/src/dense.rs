//! Column-major dense storage
//!
//! The physical container views resolve against. It implements both the
//! read side ([`MatrixView`]) and the write side ([`Receiver`]) so any view
//! can be materialized into it with [`DenseMatrix::copy_of`].

use mview_core::validation::validate_product;
use mview_core::{index, MatrixElement, MatrixView, MviewError, Receiver, Result};

/// Dense matrix stored column by column
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<E> {
    nrows: usize,
    ncols: usize,
    data: Vec<E>,
}

impl<E: MatrixElement> DenseMatrix<E> {
    /// Create an `nrows x ncols` matrix of zeros
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![E::zero(); nrows * ncols],
        }
    }

    /// Create a matrix whose element `(row, col)` is `f(row, col)`
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> E) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for col in 0..ncols {
            for row in 0..nrows {
                data.push(f(row, col));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Wrap column-major data
    pub fn from_column_major(nrows: usize, ncols: usize, data: Vec<E>) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(MviewError::DimensionMismatch);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Build from row slices, which must all have the same length
    pub fn from_rows(rows: &[&[E]]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(MviewError::DimensionMismatch);
        }
        Ok(Self::from_fn(nrows, ncols, |row, col| rows[row][col]))
    }

    /// Materialize any view through its bulk-copy path
    pub fn copy_of<M: MatrixView<Element = E> + ?Sized>(view: &M) -> Self {
        let mut dense = Self::zeros(view.nrows(), view.ncols());
        view.supply_to(&mut dense);
        dense
    }

    /// Column-major element storage
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Dense product `left * right`
    ///
    /// Only the possibly non-zero ranges reported by each operand's column
    /// bounds are visited.
    pub fn multiply<L, R>(left: &L, right: &R) -> Result<Self>
    where
        L: MatrixView<Element = E> + ?Sized,
        R: MatrixView<Element = E> + ?Sized,
    {
        let (nrows, ncols) =
            validate_product((left.nrows(), left.ncols()), (right.nrows(), right.ncols()))?;
        let mut product = Self::zeros(nrows, ncols);

        for col in 0..ncols {
            for inner in right.first_in_column(col)..right.limit_of_column(col) {
                let factor = right.get(inner, col);
                if factor == E::zero() {
                    continue;
                }
                for row in left.first_in_column(inner)..left.limit_of_column(inner) {
                    let slot = &mut product.data[index(nrows, row, col)];
                    *slot = *slot + left.get(row, inner) * factor;
                }
            }
        }

        Ok(product)
    }
}

impl<E: MatrixElement> MatrixView for DenseMatrix<E> {
    type Element = E;

    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> E {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.data[index(self.nrows, row, col)]
    }

    #[inline]
    fn get_linear(&self, index: usize) -> E {
        self.data[index]
    }
}

impl<E: MatrixElement> Receiver<E> for DenseMatrix<E> {
    fn reset(&mut self) {
        self.data.fill(E::zero());
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.fill_one(row, col, E::from_f64(value));
    }

    #[inline]
    fn fill_one(&mut self, row: usize, col: usize, value: E) {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.data[index(self.nrows, row, col)] = value;
    }

    fn fill_column(&mut self, col: usize, values: &[E]) {
        let start = index(self.nrows, 0, col);
        self.data[start..start + values.len()].copy_from_slice(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_column_major_layout() {
        let matrix = DenseMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(matrix.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(matrix.get(1, 2), 6.0);
        assert_eq!(matrix.get_linear(3), 5.0);
        assert_eq!(matrix.double_value_linear(3), 5.0);
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(
            DenseMatrix::<f64>::from_column_major(2, 2, vec![1.0; 3]),
            Err(MviewError::DimensionMismatch)
        );
        assert_eq!(
            DenseMatrix::from_rows(&[&[1.0, 2.0], &[3.0]]),
            Err(MviewError::DimensionMismatch)
        );
    }

    #[test]
    fn test_receiver_reset_and_fill() {
        let mut matrix = DenseMatrix::from_fn(3, 2, |row, col| (row + col) as f64 + 1.0);
        matrix.reset();
        assert!(matrix.as_slice().iter().all(|&value| value == 0.0));

        matrix.set(2, 1, 7.0);
        matrix.fill_column(0, &[1.0, 2.0, 3.0]);
        matrix.fill_row(1, &[8.0, 9.0]);
        assert_eq!(matrix.as_slice(), &[1.0, 8.0, 3.0, 0.0, 9.0, 7.0]);
    }

    #[test]
    fn test_multiply() {
        let a = DenseMatrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]).unwrap();
        let b = DenseMatrix::from_rows(&[&[1.0, 0.0, 2.0], &[0.0, 1.0, 3.0]]).unwrap();
        let product = DenseMatrix::multiply(&a, &b).unwrap();

        let expected = DenseMatrix::from_rows(&[
            &[1.0, 2.0, 8.0],
            &[3.0, 4.0, 18.0],
            &[5.0, 6.0, 28.0],
        ])
        .unwrap();
        assert_eq!(product, expected);

        assert_eq!(
            DenseMatrix::multiply(&a, &a),
            Err(MviewError::DimensionMismatch)
        );
    }

    #[test]
    fn test_complex_multiply() {
        let i = Complex64::new(0.0, 1.0);
        let a = DenseMatrix::from_rows(&[&[i]]).unwrap();
        let product = DenseMatrix::multiply(&a, &a).unwrap();
        assert_eq!(product.get(0, 0), Complex64::new(-1.0, 0.0));
    }
}

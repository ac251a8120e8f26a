//! Result of a conjugate-view product

use mview_core::{MatrixElement, MatrixView, Scalar};

use crate::views::ConjugateView;
use crate::DenseMatrix;

/// Product returned by [`ConjugateView::multiply`]
///
/// `Conjugated` holds the rewritten `(B * A)^H` form, still lazy in its
/// outer conjugate transpose. `Dense` holds a plain dense product.
#[derive(Debug, Clone)]
pub enum Product<E: MatrixElement> {
    Conjugated(ConjugateView<DenseMatrix<E>>),
    Dense(DenseMatrix<E>),
}

impl<E: MatrixElement> Product<E> {
    /// Whether the conjugate rewrite was applied
    pub fn is_rewritten(&self) -> bool {
        matches!(self, Product::Conjugated(_))
    }

    /// Materialize into a dense matrix
    pub fn into_dense(self) -> DenseMatrix<E> {
        match self {
            Product::Conjugated(view) => DenseMatrix::copy_of(&view),
            Product::Dense(dense) => dense,
        }
    }
}

impl<E: MatrixElement> MatrixView for Product<E> {
    type Element = E;

    fn nrows(&self) -> usize {
        match self {
            Product::Conjugated(view) => view.nrows(),
            Product::Dense(dense) => dense.nrows(),
        }
    }

    fn ncols(&self) -> usize {
        match self {
            Product::Conjugated(view) => view.ncols(),
            Product::Dense(dense) => dense.ncols(),
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> E {
        match self {
            Product::Conjugated(view) => view.get(row, col),
            Product::Dense(dense) => dense.get(row, col),
        }
    }

    #[inline]
    fn double_value(&self, row: usize, col: usize) -> f64 {
        match self {
            Product::Conjugated(view) => view.double_value(row, col),
            Product::Dense(dense) => dense.double_value(row, col),
        }
    }

    #[inline]
    fn to_scalar(&self, row: usize, col: usize) -> Scalar<E> {
        match self {
            Product::Conjugated(view) => view.to_scalar(row, col),
            Product::Dense(dense) => dense.to_scalar(row, col),
        }
    }

    fn conjugate_base(&self) -> Option<&dyn MatrixView<Element = E>> {
        match self {
            Product::Conjugated(view) => view.conjugate_base(),
            Product::Dense(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::assert_consistent;
    use crate::views::ViewExt;
    use num_complex::Complex32;

    #[test]
    fn test_product_chains_rewrite() {
        let i = Complex32::new(0.0, 1.0);
        let a = DenseMatrix::from_rows(&[&[i, Complex32::new(1.0, 0.0)]]).unwrap();
        let b = DenseMatrix::from_rows(&[&[Complex32::new(2.0, 0.0)], &[i]]).unwrap();

        let first = (&a).conjugate().multiply(&(&b).conjugate()).unwrap();
        assert!(first.is_rewritten());
        assert!(first.conjugate_base().is_some());
        assert_consistent(&first);

        let expected = DenseMatrix::multiply(
            &DenseMatrix::copy_of(&(&a).conjugate()),
            &DenseMatrix::copy_of(&(&b).conjugate()),
        )
        .unwrap();
        assert_eq!(first.clone().into_dense(), expected);

        // a rewritten product is itself a conjugate operand
        let chained = (&b).conjugate().multiply(&first).unwrap();
        assert!(chained.is_rewritten());
        let expected_chain =
            DenseMatrix::multiply(&DenseMatrix::copy_of(&(&b).conjugate()), &expected).unwrap();
        assert_eq!(chained.into_dense(), expected_chain);
    }
}

//! Capability shared by every sparse structure

/// Sparse structure trait for format-agnostic non-zero accounting
pub trait SparseStructure {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of stored non-zero entries
    fn count_nonzeros(&self) -> usize;

    /// Stored entries relative to the total cell count, 0 for an empty extent
    fn density(&self) -> f64 {
        let (nrows, ncols) = self.dimensions();
        let total = nrows.saturating_mul(ncols);
        if total == 0 {
            0.0
        } else {
            self.count_nonzeros() as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize, usize, usize);

    impl SparseStructure for Fixed {
        fn dimensions(&self) -> (usize, usize) {
            (self.0, self.1)
        }

        fn count_nonzeros(&self) -> usize {
            self.2
        }
    }

    #[test]
    fn test_density() {
        assert_eq!(Fixed(3, 3, 3).density(), 3.0 / 9.0);
        assert_eq!(Fixed(0, 4, 0).density(), 0.0);
        assert_eq!(Fixed(2, 5, 10).density(), 1.0);
    }
}

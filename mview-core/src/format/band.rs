//! Band masks and their per-row/per-column iteration bounds
//!
//! Every masking shape (triangular, Hessenberg, diagonal) is a band with a
//! lower and an upper bandwidth. A cell `(row, col)` is admissible when
//! `row - col <= lower` and `col - row <= upper`. `usize::MAX` stands for an
//! unbounded side.

/// Band mask with optional unit diagonal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandMask {
    lower: usize,
    upper: usize,
    unit_diagonal: bool,
}

impl BandMask {
    /// Band with `lower` sub-diagonals and `upper` super-diagonals
    pub const fn banded(lower: usize, upper: usize) -> Self {
        Self {
            lower,
            upper,
            unit_diagonal: false,
        }
    }

    /// Zero below the main diagonal
    pub const fn upper_triangular() -> Self {
        Self::banded(0, usize::MAX)
    }

    /// Zero above the main diagonal
    pub const fn lower_triangular() -> Self {
        Self::banded(usize::MAX, 0)
    }

    /// Upper triangular with the diagonal forced to one
    pub const fn unit_upper_triangular() -> Self {
        Self::upper_triangular().with_unit_diagonal()
    }

    /// Lower triangular with the diagonal forced to one
    pub const fn unit_lower_triangular() -> Self {
        Self::lower_triangular().with_unit_diagonal()
    }

    /// Zero below the first subdiagonal
    pub const fn upper_hessenberg() -> Self {
        Self::banded(1, usize::MAX)
    }

    /// Zero above the first superdiagonal
    pub const fn lower_hessenberg() -> Self {
        Self::banded(usize::MAX, 1)
    }

    /// Only the main diagonal
    pub const fn diagonal() -> Self {
        Self::banded(0, 0)
    }

    /// Force the main diagonal to the algebraic one
    pub const fn with_unit_diagonal(mut self) -> Self {
        self.unit_diagonal = true;
        self
    }

    /// Number of admissible sub-diagonals
    pub const fn lower_bandwidth(&self) -> usize {
        self.lower
    }

    /// Number of admissible super-diagonals
    pub const fn upper_bandwidth(&self) -> usize {
        self.upper
    }

    /// Whether the diagonal is forced to one
    pub const fn is_unit_diagonal(&self) -> bool {
        self.unit_diagonal
    }

    /// Whether `(row, col)` may hold a non-zero
    #[inline]
    pub const fn admits(&self, row: usize, col: usize) -> bool {
        row <= col.saturating_add(self.lower) && col <= row.saturating_add(self.upper)
    }

    #[inline]
    pub const fn first_in_row(&self, row: usize) -> usize {
        row.saturating_sub(self.lower)
    }

    #[inline]
    pub const fn limit_of_row(&self, row: usize, ncols: usize) -> usize {
        let limit = row.saturating_add(self.upper).saturating_add(1);
        if limit < ncols {
            limit
        } else {
            ncols
        }
    }

    #[inline]
    pub const fn first_in_column(&self, col: usize) -> usize {
        col.saturating_sub(self.upper)
    }

    #[inline]
    pub const fn limit_of_column(&self, col: usize, nrows: usize) -> usize {
        let limit = col.saturating_add(self.lower).saturating_add(1);
        if limit < nrows {
            limit
        } else {
            nrows
        }
    }

    /// Count of admissible cells in an `nrows x ncols` extent
    pub fn admissible_cells(&self, nrows: usize, ncols: usize) -> usize {
        (0..ncols)
            .map(|col| {
                self.limit_of_column(col, nrows)
                    .saturating_sub(self.first_in_column(col))
            })
            .sum()
    }
}

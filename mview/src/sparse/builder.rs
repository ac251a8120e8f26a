//! Sparse triplet accumulator

use hashbrown::HashMap;
use mview_core::validation::{checked_cell_count, validate_coordinate};
use mview_core::{
    MatrixElement, MatrixFormat, MatrixView, MviewError, Receiver, Result, SparseStructure,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::compressed::{compress, CompressedSparse, ToCompressed};
use crate::config::{BuilderConfig, DuplicatePolicy};

/// One stored entry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triplet<E> {
    pub row: usize,
    pub col: usize,
    pub value: E,
}

impl<E> Triplet<E> {
    pub fn new(row: usize, col: usize, value: E) -> Self {
        Self { row, col, value }
    }
}

/// Accumulates non-zero entries for an `nrows x ncols` matrix
///
/// Exact zeros are never recorded. Repeated coordinates are combined by the
/// configured [`DuplicatePolicy`]. [`build`](Self::build) consumes the
/// builder, so no entry can be added after compression.
#[derive(Debug, Clone)]
pub struct SparseBuilder<E> {
    nrows: usize,
    ncols: usize,
    format: MatrixFormat,
    config: BuilderConfig,
    triplets: Vec<Triplet<E>>,
    // coordinate -> position in `triplets`, unused under `DuplicatePolicy::Keep`
    positions: HashMap<(usize, usize), usize>,
    // duplicates combined into a surviving entry / duplicates that removed one
    merged: usize,
    cancelled: usize,
}

impl<E: MatrixElement> SparseBuilder<E> {
    /// Create a builder targeting `format` with the default configuration
    pub fn new(nrows: usize, ncols: usize, format: MatrixFormat) -> Result<Self> {
        Self::with_config(nrows, ncols, format, BuilderConfig::default())
    }

    /// Create a builder with an explicit configuration
    ///
    /// Only the compressed formats are valid targets.
    pub fn with_config(
        nrows: usize,
        ncols: usize,
        format: MatrixFormat,
        config: BuilderConfig,
    ) -> Result<Self> {
        if !format.is_compressed() {
            return Err(MviewError::UnsupportedFormat);
        }
        checked_cell_count(nrows, ncols)?;

        let positions = match config.duplicate_policy() {
            DuplicatePolicy::Keep => HashMap::new(),
            _ => HashMap::with_capacity(config.capacity()),
        };

        Ok(Self {
            nrows,
            ncols,
            format,
            triplets: Vec::with_capacity(config.capacity()),
            positions,
            config,
            merged: 0,
            cancelled: 0,
        })
    }

    /// Record `value` at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: E) -> Result<()> {
        validate_coordinate(row, col, self.nrows, self.ncols)?;
        self.insert(row, col, value);
        Ok(())
    }

    pub fn format(&self) -> MatrixFormat {
        self.format
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Entries recorded so far, in insertion order
    pub fn triplets(&self) -> &[Triplet<E>] {
        &self.triplets
    }

    /// Compress the recorded entries into the target format
    pub fn build(self) -> CompressedSparse<E> {
        let compressed = compress(
            self.format,
            self.nrows,
            self.ncols,
            &self.triplets,
            self.config.sorted_indices(),
        );
        log::debug!(
            target: "mview",
            "compressed {} triplets into {}x{} {} ({} merged, {} cancelled, {})",
            self.triplets.len(),
            self.nrows,
            self.ncols,
            self.format,
            self.merged,
            self.cancelled,
            E::data_type()
        );
        compressed
    }

    /// Collect every possibly non-zero cell of `view` into a new container
    pub fn from_view<M>(view: &M, format: MatrixFormat) -> Result<CompressedSparse<E>>
    where
        M: MatrixView<Element = E> + ?Sized,
    {
        let mut builder = Self::new(view.nrows(), view.ncols(), format)?;
        view.supply_to(&mut builder);
        Ok(builder.build())
    }

    fn insert(&mut self, row: usize, col: usize, value: E) {
        let zero = E::zero();
        let policy = self.config.duplicate_policy();
        if policy == DuplicatePolicy::Keep {
            if value != zero {
                self.triplets.push(Triplet::new(row, col, value));
            }
            return;
        }

        match self.positions.get(&(row, col)).copied() {
            Some(position) => {
                let combined = match policy {
                    DuplicatePolicy::Sum => self.triplets[position].value + value,
                    _ => value,
                };
                if combined == zero {
                    self.cancelled += 1;
                    self.remove(position);
                } else {
                    self.merged += 1;
                    self.triplets[position].value = combined;
                }
            }
            None if value != zero => {
                self.positions.insert((row, col), self.triplets.len());
                self.triplets.push(Triplet::new(row, col, value));
            }
            None => {}
        }
    }

    fn remove(&mut self, position: usize) {
        let removed = self.triplets.swap_remove(position);
        self.positions.remove(&(removed.row, removed.col));
        if let Some(moved) = self.triplets.get(position) {
            self.positions.insert((moved.row, moved.col), position);
        }
    }
}

impl<E: MatrixElement> SparseStructure for SparseBuilder<E> {
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn count_nonzeros(&self) -> usize {
        self.triplets.len()
    }
}

impl<E: MatrixElement> ToCompressed<E> for SparseBuilder<E> {
    fn to_csr(&self) -> CompressedSparse<E> {
        compress(
            MatrixFormat::Csr,
            self.nrows,
            self.ncols,
            &self.triplets,
            self.config.sorted_indices(),
        )
    }

    fn to_csc(&self) -> CompressedSparse<E> {
        compress(
            MatrixFormat::Csc,
            self.nrows,
            self.ncols,
            &self.triplets,
            self.config.sorted_indices(),
        )
    }
}

/// Views fill a builder sized to their own extent
impl<E: MatrixElement> Receiver<E> for SparseBuilder<E> {
    fn reset(&mut self) {
        self.triplets.clear();
        self.positions.clear();
        self.merged = 0;
        self.cancelled = 0;
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.fill_one(row, col, E::from_f64(value));
    }

    fn fill_one(&mut self, row: usize, col: usize, value: E) {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.insert(row, col, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MaskedView;
    use crate::DenseMatrix;
    use num_complex::Complex32;

    #[test]
    fn test_zero_suppression() {
        let mut builder = SparseBuilder::new(2, 2, MatrixFormat::Csr).unwrap();
        builder.set(0, 1, 0.0).unwrap();
        assert_eq!(builder.density(), 0.0);
        assert_eq!(builder.count_nonzeros(), 0);

        let compressed = builder.build();
        assert_eq!(compressed.count_nonzeros(), 0);
        assert_eq!(compressed.major_pointers(), &[0, 0, 0]);
    }

    #[test]
    fn test_out_of_range() {
        let mut builder = SparseBuilder::<f64>::new(2, 3, MatrixFormat::Csc).unwrap();
        assert_eq!(builder.set(2, 0, 1.0), Err(MviewError::IndexOutOfBounds));
        assert_eq!(builder.set(0, 3, 1.0), Err(MviewError::IndexOutOfBounds));
        assert_eq!(builder.set(1, 2, 1.0), Ok(()));
    }

    #[test]
    fn test_coo_target_rejected() {
        assert_eq!(
            SparseBuilder::<f32>::new(2, 2, MatrixFormat::Coo).err(),
            Some(MviewError::UnsupportedFormat)
        );
        assert_eq!(
            SparseBuilder::<f32>::new(usize::MAX, 2, MatrixFormat::Csr).err(),
            Some(MviewError::DimensionOverflow)
        );
    }

    #[test]
    fn test_duplicates_sum() {
        let mut builder = SparseBuilder::new(3, 3, MatrixFormat::Csr).unwrap();
        builder.set(1, 1, 2.0).unwrap();
        builder.set(0, 2, 1.0).unwrap();
        builder.set(1, 1, 3.0).unwrap();
        assert_eq!(builder.count_nonzeros(), 2);
        assert_eq!(builder.triplets()[0], Triplet::new(1, 1, 5.0));

        // cancelling to zero removes the entry and keeps the index consistent
        builder.set(1, 1, -5.0).unwrap();
        assert_eq!(builder.count_nonzeros(), 1);
        builder.set(0, 2, 1.0).unwrap();
        assert_eq!(builder.triplets(), &[Triplet::new(0, 2, 2.0)]);

        let compressed = builder.build();
        assert_eq!(compressed.get(0, 2), 2.0);
        assert_eq!(compressed.get(1, 1), 0.0);
    }

    #[test]
    fn test_duplicate_counters() {
        let mut builder = SparseBuilder::new(2, 2, MatrixFormat::Csr).unwrap();
        builder.set(0, 0, 1.0).unwrap();
        builder.set(0, 0, 2.0).unwrap();
        builder.set(0, 0, -3.0).unwrap();
        assert_eq!((builder.merged, builder.cancelled), (1, 1));

        // a cancelled coordinate starts over as a fresh entry
        builder.set(0, 0, 4.0).unwrap();
        assert_eq!((builder.merged, builder.cancelled), (1, 1));
        assert_eq!(builder.triplets(), &[Triplet::new(0, 0, 4.0)]);

        Receiver::reset(&mut builder);
        assert_eq!((builder.merged, builder.cancelled), (0, 0));
        assert_eq!(builder.count_nonzeros(), 0);
    }

    #[test]
    fn test_duplicates_last_wins() {
        let config = BuilderConfig::default().with_duplicate_policy(DuplicatePolicy::LastWins);
        let mut builder = SparseBuilder::with_config(2, 2, MatrixFormat::Csc, config).unwrap();
        builder.set(0, 0, 4.0).unwrap();
        builder.set(0, 0, 6.0).unwrap();
        builder.set(1, 0, 1.0).unwrap();
        assert_eq!(builder.count_nonzeros(), 2);

        builder.set(0, 0, 0.0).unwrap();
        assert_eq!(builder.triplets(), &[Triplet::new(1, 0, 1.0)]);
    }

    #[test]
    fn test_duplicates_keep() {
        let config = BuilderConfig::default().with_duplicate_policy(DuplicatePolicy::Keep);
        let mut builder = SparseBuilder::with_config(2, 2, MatrixFormat::Csr, config).unwrap();
        builder.set(0, 0, 4.0).unwrap();
        builder.set(0, 0, 6.0).unwrap();
        assert_eq!(builder.count_nonzeros(), 2);

        let compressed = builder.build();
        assert_eq!(compressed.count_nonzeros(), 2);
        assert_eq!(compressed.get(0, 0), 10.0);
        assert_eq!(DenseMatrix::copy_of(&compressed).get(0, 0), 10.0);
    }

    #[test]
    fn test_from_view() {
        let dense = DenseMatrix::from_fn(4, 4, |row, col| (row * 4 + col) as f64 + 1.0);
        let upper = MaskedView::upper_triangular(&dense);
        let compressed = SparseBuilder::from_view(&upper, MatrixFormat::Csr).unwrap();

        assert_eq!(compressed.count_nonzeros(), 10);
        assert_eq!(DenseMatrix::copy_of(&compressed), DenseMatrix::copy_of(&upper));
    }

    #[test]
    fn test_complex_entries() {
        let mut builder = SparseBuilder::new(2, 2, MatrixFormat::Csr).unwrap();
        builder.set(0, 1, Complex32::new(0.0, 1.0)).unwrap();
        builder.set(0, 1, Complex32::new(0.0, -1.0)).unwrap();
        builder.set(1, 0, Complex32::new(2.0, 0.0)).unwrap();

        assert_eq!(builder.to_csc().count_nonzeros(), 1);
        assert_eq!(builder.density(), 0.25);
    }
}

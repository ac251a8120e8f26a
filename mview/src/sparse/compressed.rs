//! Compressed sparse row/column container

use mview_core::validation::validate_compressed_layout;
use mview_core::{MatrixElement, MatrixFormat, MatrixView, Receiver, Result, SparseStructure};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::builder::Triplet;

/// Conversion of a sparse structure into either compressed orientation
pub trait ToCompressed<E: MatrixElement>: SparseStructure {
    fn to_csr(&self) -> CompressedSparse<E>;

    fn to_csc(&self) -> CompressedSparse<E>;
}

/// CSR or CSC arrays with the usual pointer convention
///
/// `major_pointers` has one entry per major line plus one; line `k` owns
/// `minor_indices[major_pointers[k]..major_pointers[k + 1]]` and the values
/// at the same positions. The major axis is rows for CSR and columns for CSC.
///
/// Deserialized input goes through [`from_parts`](Self::from_parts), so a
/// malformed layout is rejected instead of reaching the accessors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "raw::RawCompressed<E>",
        bound(deserialize = "E: MatrixElement + Deserialize<'de>")
    )
)]
pub struct CompressedSparse<E> {
    format: MatrixFormat,
    nrows: usize,
    ncols: usize,
    values: Vec<E>,
    minor_indices: Vec<usize>,
    major_pointers: Vec<usize>,
}

#[cfg(feature = "serde")]
mod raw {
    use mview_core::MatrixFormat;
    use serde::Deserialize;

    /// Unchecked field layout of a serialized container
    #[derive(Deserialize)]
    pub struct RawCompressed<E> {
        pub format: MatrixFormat,
        pub nrows: usize,
        pub ncols: usize,
        pub values: Vec<E>,
        pub minor_indices: Vec<usize>,
        pub major_pointers: Vec<usize>,
    }
}

#[cfg(feature = "serde")]
impl<E: MatrixElement> TryFrom<raw::RawCompressed<E>> for CompressedSparse<E> {
    type Error = mview_core::MviewError;

    fn try_from(raw: raw::RawCompressed<E>) -> Result<Self> {
        Self::from_parts(
            raw.format,
            raw.nrows,
            raw.ncols,
            raw.major_pointers,
            raw.minor_indices,
            raw.values,
        )
    }
}

/// Stable counting sort of `triplets` into `format`
pub(crate) fn compress<E: MatrixElement>(
    format: MatrixFormat,
    nrows: usize,
    ncols: usize,
    triplets: &[Triplet<E>],
    sorted: bool,
) -> CompressedSparse<E> {
    let major_dim = format.major_dim(nrows, ncols);
    let nnz = triplets.len();

    let mut major_pointers = vec![0usize; major_dim + 1];
    for triplet in triplets {
        let (major, _) = format.split(triplet.row, triplet.col);
        major_pointers[major + 1] += 1;
    }
    for major in 0..major_dim {
        major_pointers[major + 1] += major_pointers[major];
    }

    let mut cursor = major_pointers[..major_dim].to_vec();
    let mut minor_indices = vec![0usize; nnz];
    let mut values = vec![E::zero(); nnz];
    for triplet in triplets {
        let (major, minor) = format.split(triplet.row, triplet.col);
        let slot = cursor[major];
        cursor[major] += 1;
        minor_indices[slot] = minor;
        values[slot] = triplet.value;
    }

    let mut compressed = CompressedSparse {
        format,
        nrows,
        ncols,
        values,
        minor_indices,
        major_pointers,
    };
    if sorted {
        compressed.sort_indices();
    }
    compressed
}

impl<E: MatrixElement> CompressedSparse<E> {
    /// Wrap raw arrays after validating the pointer convention
    pub fn from_parts(
        format: MatrixFormat,
        nrows: usize,
        ncols: usize,
        major_pointers: Vec<usize>,
        minor_indices: Vec<usize>,
        values: Vec<E>,
    ) -> Result<Self> {
        validate_compressed_layout(
            format,
            nrows,
            ncols,
            &major_pointers,
            &minor_indices,
            values.len(),
        )?;
        Ok(Self {
            format,
            nrows,
            ncols,
            values,
            minor_indices,
            major_pointers,
        })
    }

    pub fn format(&self) -> MatrixFormat {
        self.format
    }

    pub fn values(&self) -> &[E] {
        &self.values
    }

    pub fn minor_indices(&self) -> &[usize] {
        &self.minor_indices
    }

    pub fn major_pointers(&self) -> &[usize] {
        &self.major_pointers
    }

    /// Number of major lines: rows for CSR, columns for CSC
    pub fn major_dim(&self) -> usize {
        self.format.major_dim(self.nrows, self.ncols)
    }

    /// Minor indices and values of major line `major`
    pub fn major_line(&self, major: usize) -> (&[usize], &[E]) {
        let range = self.major_pointers[major]..self.major_pointers[major + 1];
        (&self.minor_indices[range.clone()], &self.values[range])
    }

    /// Stored entries in major-line order
    pub fn triplets(&self) -> impl Iterator<Item = Triplet<E>> + '_ {
        (0..self.major_dim()).flat_map(move |major| {
            let (indices, values) = self.major_line(major);
            indices.iter().zip(values).map(move |(&minor, &value)| {
                let (row, col) = self.format.join(major, minor);
                Triplet::new(row, col, value)
            })
        })
    }

    /// Whether minor indices are non-decreasing within every major line
    pub fn is_sorted(&self) -> bool {
        (0..self.major_dim()).all(|major| {
            self.major_line(major)
                .0
                .windows(2)
                .all(|pair| pair[0] <= pair[1])
        })
    }

    /// Sort every major line by minor index, keeping equal indices in order
    pub fn sort_indices(&mut self) {
        let mut line = Vec::new();
        for major in 0..self.major_dim() {
            let range = self.major_pointers[major]..self.major_pointers[major + 1];
            line.clear();
            line.extend(
                self.minor_indices[range.clone()]
                    .iter()
                    .copied()
                    .zip(self.values[range.clone()].iter().copied()),
            );
            line.sort_by_key(|&(minor, _)| minor);
            for (offset, (minor, value)) in line.iter().enumerate() {
                self.minor_indices[range.start + offset] = *minor;
                self.values[range.start + offset] = *value;
            }
        }
    }

    /// Raw bytes of the pointer array
    pub fn pointer_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.major_pointers)
    }

    /// Raw bytes of the minor index array
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.minor_indices)
    }

    /// Raw bytes of the value array
    pub fn value_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    fn reoriented(&self, format: MatrixFormat) -> Self {
        if format == self.format {
            return self.clone();
        }
        let triplets: Vec<Triplet<E>> = self.triplets().collect();
        // scanning the old major order yields sorted lines in the new one
        compress(format, self.nrows, self.ncols, &triplets, false)
    }

    /// First and one-past-last minor index stored in `major`, `(0, 0)` if empty
    fn line_span(&self, major: usize) -> (usize, usize) {
        let indices = self.major_line(major).0;
        match (indices.iter().min(), indices.iter().max()) {
            (Some(&first), Some(&last)) => (first, last + 1),
            _ => (0, 0),
        }
    }
}

impl<E: MatrixElement> SparseStructure for CompressedSparse<E> {
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn count_nonzeros(&self) -> usize {
        self.major_pointers[self.major_dim()]
    }
}

impl<E: MatrixElement> ToCompressed<E> for CompressedSparse<E> {
    fn to_csr(&self) -> CompressedSparse<E> {
        self.reoriented(MatrixFormat::Csr)
    }

    fn to_csc(&self) -> CompressedSparse<E> {
        self.reoriented(MatrixFormat::Csc)
    }
}

impl<E: MatrixElement> MatrixView for CompressedSparse<E> {
    type Element = E;

    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    fn get(&self, row: usize, col: usize) -> E {
        let (major, minor) = self.format.split(row, col);
        let (indices, values) = self.major_line(major);
        indices
            .iter()
            .zip(values)
            .filter(|(index, _)| **index == minor)
            .fold(E::zero(), |sum, (_, &value)| sum + value)
    }

    fn first_in_row(&self, row: usize) -> usize {
        match self.format {
            MatrixFormat::Csr => self.line_span(row).0,
            _ => 0,
        }
    }

    fn limit_of_row(&self, row: usize) -> usize {
        match self.format {
            MatrixFormat::Csr => self.line_span(row).1,
            _ => self.ncols,
        }
    }

    fn first_in_column(&self, col: usize) -> usize {
        match self.format {
            MatrixFormat::Csc => self.line_span(col).0,
            _ => 0,
        }
    }

    fn limit_of_column(&self, col: usize) -> usize {
        match self.format {
            MatrixFormat::Csc => self.line_span(col).1,
            _ => self.nrows,
        }
    }

    /// Visits stored entries only, summing repeated coordinates
    fn supply_to(&self, receiver: &mut dyn Receiver<E>) {
        receiver.reset();
        let mut line: Vec<(usize, E)> = Vec::new();
        for major in 0..self.major_dim() {
            let (indices, values) = self.major_line(major);
            line.clear();
            line.extend(indices.iter().copied().zip(values.iter().copied()));
            line.sort_by_key(|&(minor, _)| minor);

            let mut entries = line.iter().copied().peekable();
            while let Some((minor, mut value)) = entries.next() {
                while let Some(&(next, more)) = entries.peek() {
                    if next != minor {
                        break;
                    }
                    value = value + more;
                    entries.next();
                }
                let (row, col) = self.format.join(major, minor);
                receiver.fill_one(row, col, value);
            }
        }
    }
}

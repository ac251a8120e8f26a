//! Compressed array layout validation
//!
//! Checks the CSR/CSC pointer convention on raw arrays before they are
//! wrapped in a container: `major_pointers` has `major_dim + 1` entries,
//! starts at 0, never decreases and ends at the entry count, and every minor
//! index addresses a valid line of the minor axis.

use crate::{MatrixFormat, MviewError};

/// Validate raw compressed arrays against an `nrows x ncols` extent
pub fn validate_compressed_layout(
    format: MatrixFormat,
    nrows: usize,
    ncols: usize,
    major_pointers: &[usize],
    minor_indices: &[usize],
    value_count: usize,
) -> Result<(), MviewError> {
    if !format.is_compressed() {
        return Err(MviewError::UnsupportedFormat);
    }

    let major_dim = format.major_dim(nrows, ncols);
    let minor_dim = format.minor_dim(nrows, ncols);

    if major_pointers.len() != major_dim + 1 {
        return Err(MviewError::DimensionMismatch);
    }
    if minor_indices.len() != value_count {
        return Err(MviewError::DimensionMismatch);
    }

    if major_pointers[0] != 0 || major_pointers[major_dim] != value_count {
        return Err(MviewError::CorruptedData);
    }
    if major_pointers.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(MviewError::CorruptedData);
    }
    if minor_indices.iter().any(|&minor| minor >= minor_dim) {
        return Err(MviewError::IndexOutOfBounds);
    }

    Ok(())
}

//! Extent validation for view construction
//!
//! Pure arithmetic checks run once when a view or builder is constructed,
//! so element reads never need to re-check them.

use crate::MviewError;

/// Validate that `(row, col)` lies inside an `nrows x ncols` extent
pub const fn validate_coordinate(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), MviewError> {
    if row >= nrows || col >= ncols {
        return Err(MviewError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate that an extent is square, returning its order
pub const fn validate_square(nrows: usize, ncols: usize) -> Result<usize, MviewError> {
    if nrows != ncols {
        return Err(MviewError::NonSquare);
    }
    Ok(nrows)
}

/// Validate a repetition count and compute the repeated extent
///
/// `repetitions` must be at least 1 and `extent * repetitions` must not
/// overflow.
pub const fn validate_repetitions(extent: usize, repetitions: usize) -> Result<usize, MviewError> {
    if repetitions == 0 {
        return Err(MviewError::InvalidRepetitions);
    }
    match extent.checked_mul(repetitions) {
        Some(repeated) => Ok(repeated),
        None => Err(MviewError::DimensionOverflow),
    }
}

/// Total cell count with overflow protection
pub const fn checked_cell_count(nrows: usize, ncols: usize) -> Result<usize, MviewError> {
    match nrows.checked_mul(ncols) {
        Some(count) => Ok(count),
        None => Err(MviewError::DimensionOverflow),
    }
}

/// Validate operand extents of `left * right`, returning the product extent
pub const fn validate_product(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), MviewError> {
    if left.1 != right.0 {
        return Err(MviewError::DimensionMismatch);
    }
    Ok((left.0, right.1))
}

//! Error types for matrix view and sparse construction operations

/// Errors that can occur while constructing views or sparse structures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MviewError {
    /// Coordinate outside the logical extent
    IndexOutOfBounds,
    /// Operand extents are incompatible
    DimensionMismatch,
    /// Requested extent does not fit in `usize`
    DimensionOverflow,
    /// Operation requires a square matrix
    NonSquare,
    /// Repetition count must be at least one
    InvalidRepetitions,
    /// Format cannot be used for the requested operation
    UnsupportedFormat,
    /// Compressed arrays violate the pointer/index layout
    CorruptedData,
}

impl core::fmt::Display for MviewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MviewError::IndexOutOfBounds => "Index out of bounds",
            MviewError::DimensionMismatch => "Dimension mismatch",
            MviewError::DimensionOverflow => "Dimension overflow",
            MviewError::NonSquare => "Matrix is not square",
            MviewError::InvalidRepetitions => "Repetition count must be at least 1",
            MviewError::UnsupportedFormat => "Unsupported matrix format",
            MviewError::CorruptedData => "Compressed layout is inconsistent",
        };
        write!(f, "{msg}")
    }
}

/// Result type for view and sparse operations
pub type Result<T> = core::result::Result<T, MviewError>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(MviewError::NonSquare.to_string(), "Matrix is not square");
        assert_eq!(
            MviewError::InvalidRepetitions.to_string(),
            "Repetition count must be at least 1"
        );
    }
}

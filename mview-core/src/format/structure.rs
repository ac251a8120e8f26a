//! Storage orientation and element type descriptors

/// Sparse storage formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MatrixFormat {
    /// Coordinate format (COO)
    Coo = 0,
    /// Compressed Sparse Row (CSR)
    Csr = 1,
    /// Compressed Sparse Column (CSC)
    Csc = 2,
}

impl MatrixFormat {
    /// Whether entries are grouped by a major axis
    pub const fn is_compressed(&self) -> bool {
        matches!(self, MatrixFormat::Csr | MatrixFormat::Csc)
    }

    /// Extent of the axis grouped contiguously (rows for CSR, columns for CSC)
    ///
    /// COO has no major axis; it reports the row count so pointer arrays
    /// sized from it stay valid.
    pub const fn major_dim(&self, nrows: usize, ncols: usize) -> usize {
        match self {
            MatrixFormat::Csc => ncols,
            MatrixFormat::Csr | MatrixFormat::Coo => nrows,
        }
    }

    /// Extent of the axis stored per entry
    pub const fn minor_dim(&self, nrows: usize, ncols: usize) -> usize {
        match self {
            MatrixFormat::Csc => nrows,
            MatrixFormat::Csr | MatrixFormat::Coo => ncols,
        }
    }

    /// Split a `(row, col)` coordinate into `(major, minor)`
    #[inline]
    pub const fn split(&self, row: usize, col: usize) -> (usize, usize) {
        match self {
            MatrixFormat::Csc => (col, row),
            MatrixFormat::Csr | MatrixFormat::Coo => (row, col),
        }
    }

    /// Join a `(major, minor)` pair back into `(row, col)`
    #[inline]
    pub const fn join(&self, major: usize, minor: usize) -> (usize, usize) {
        match self {
            MatrixFormat::Csc => (minor, major),
            MatrixFormat::Csr | MatrixFormat::Coo => (major, minor),
        }
    }
}

impl core::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixFormat::Coo => write!(f, "COO"),
            MatrixFormat::Csr => write!(f, "CSR"),
            MatrixFormat::Csc => write!(f, "CSC"),
        }
    }
}

/// Element types supported by views and sparse structures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    F32 = 0,
    F64 = 1,
    C32 = 2,
    C64 = 3,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::C32 => write!(f, "c32"),
            DataType::C64 => write!(f, "c64"),
        }
    }
}

impl DataType {
    /// Get the size in bytes for this data type
    pub const fn size_bytes(&self) -> usize {
        match self {
            DataType::F32 => 4,
            DataType::F64 | DataType::C32 => 8,
            DataType::C64 => 16,
        }
    }

    /// Whether values of this type carry an imaginary part
    pub const fn is_complex(&self) -> bool {
        matches!(self, DataType::C32 | DataType::C64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_minor_split() {
        assert_eq!(MatrixFormat::Csr.major_dim(3, 5), 3);
        assert_eq!(MatrixFormat::Csc.major_dim(3, 5), 5);
        assert_eq!(MatrixFormat::Csc.minor_dim(3, 5), 3);

        assert_eq!(MatrixFormat::Csr.split(1, 4), (1, 4));
        assert_eq!(MatrixFormat::Csc.split(1, 4), (4, 1));
        assert_eq!(MatrixFormat::Csc.join(4, 1), (1, 4));
        assert!(!MatrixFormat::Coo.is_compressed());
    }

    #[test]
    fn test_data_type_sizes() {
        assert_eq!(DataType::F32.size_bytes(), 4);
        assert_eq!(DataType::C64.size_bytes(), 16);
        assert!(DataType::C32.is_complex());
        assert!(!DataType::F64.is_complex());
    }
}

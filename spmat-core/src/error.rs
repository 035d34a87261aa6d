//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        /// Dimensions of the left operand as (rows, cols)
        left: (usize, usize),
        /// Dimensions of the right operand as (rows, cols)
        right: (usize, usize),
    },
    /// Write index outside the declared dimensions
    OutOfBounds {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "Incompatible matrix dimensions: {} x {} vs {} x {}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::OutOfBounds { row, col, rows, cols } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of matrix bounds ({rows} x {cols})"
                )
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

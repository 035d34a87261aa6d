//! Combined error surface for integrating callers
//!
//! Construction-time failures (file and format problems from the loader)
//! are kept as a category distinct from the arithmetic failures originating
//! in the core.

use std::io;

use spmat_core::MatrixError;

use crate::loader::LoadError;

/// Errors surfaced by the spmat library
#[derive(Debug)]
pub enum Error {
    /// Matrix construction failed while loading or parsing input
    Construction(LoadError),
    /// Arithmetic operation failed in the core
    Matrix(MatrixError),
    /// I/O failure while printing results
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Construction(err) => write!(f, "Matrix construction failed: {err}"),
            Error::Matrix(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "I/O failure: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Construction(err) => Some(err),
            Error::Matrix(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Construction(err)
    }
}

impl From<MatrixError> for Error {
    fn from(err: MatrixError) -> Self {
        Error::Matrix(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_category_is_distinct() {
        let err: Error = LoadError::InvalidFormat {
            line: 3,
            reason: "expected '(row,col,value)' triple",
        }
        .into();
        assert!(matches!(err, Error::Construction(_)));
        assert!(err.to_string().starts_with("Matrix construction failed"));

        let err: Error = MatrixError::DimensionMismatch {
            left: (1, 2),
            right: (2, 1),
        }
        .into();
        assert!(matches!(err, Error::Matrix(_)));
    }
}

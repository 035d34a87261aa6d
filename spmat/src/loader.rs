//! Text-format loader for sparse matrices
//!
//! The format declares the dimensions on the first two lines, then lists one
//! `(row,col,value)` triple per line. Blank lines between triples are
//! ignored.
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,5)
//! (2,1,-7)
//! ```
//!
//! All failures are reported to the caller as [`LoadError`] values; the
//! loader never terminates the process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use spmat_core::{SparseMatrix, Triple};

/// Errors that can occur while loading a matrix description
#[derive(Debug)]
pub enum LoadError {
    /// Input file does not exist
    NotFound(PathBuf),
    /// Malformed header or triple line (1-based line number)
    InvalidFormat {
        /// Line at which parsing failed
        line: usize,
        /// What the parser expected
        reason: &'static str,
    },
    /// Underlying I/O failure other than a missing file
    Io(io::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "File {} not found", path.display()),
            LoadError::InvalidFormat { line, reason } => {
                write!(f, "Input file has wrong format (line {line}: {reason})")
            }
            LoadError::Io(err) => write!(f, "I/O failure: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Load a sparse matrix from a text file
///
/// A missing file is reported as [`LoadError::NotFound`]; any other read
/// failure surfaces as [`LoadError::Io`].
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;
    parse_matrix(&text)
}

/// Parse a sparse matrix from its text description
///
/// Duplicate coordinates keep the last value; zero-valued triples are
/// accepted but produce no stored entry.
pub fn parse_matrix(text: &str) -> Result<SparseMatrix, LoadError> {
    let mut lines = text.lines().enumerate();

    let (idx, raw) = lines.next().ok_or(LoadError::InvalidFormat {
        line: 1,
        reason: "expected 'rows=<count>' header",
    })?;
    let rows = parse_dimension(raw, idx + 1, "rows=", "expected 'rows=<count>' header")?;

    let (idx, raw) = lines.next().ok_or(LoadError::InvalidFormat {
        line: 2,
        reason: "expected 'cols=<count>' header",
    })?;
    let cols = parse_dimension(raw, idx + 1, "cols=", "expected 'cols=<count>' header")?;

    let mut triples = Vec::new();
    for (idx, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        triples.push(parse_triple(line, idx + 1)?);
    }

    debug!(
        "parsed {rows} x {cols} matrix description with {} triples",
        triples.len()
    );
    Ok(SparseMatrix::from_triples(rows, cols, triples))
}

/// Parse a `key=value` dimension header line
fn parse_dimension(
    raw: &str,
    line: usize,
    prefix: &str,
    missing: &'static str,
) -> Result<usize, LoadError> {
    let value = raw
        .trim()
        .strip_prefix(prefix)
        .ok_or(LoadError::InvalidFormat {
            line,
            reason: missing,
        })?;
    value.trim().parse().map_err(|_| LoadError::InvalidFormat {
        line,
        reason: "dimension is not a non-negative integer",
    })
}

/// Parse one `(row,col,value)` triple line
fn parse_triple(line: &str, line_no: usize) -> Result<Triple, LoadError> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(LoadError::InvalidFormat {
            line: line_no,
            reason: "expected '(row,col,value)' triple",
        })?;

    let mut parts = inner.split(',');
    let (row, col, value) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), Some(value), None) => (row, col, value),
        _ => {
            return Err(LoadError::InvalidFormat {
                line: line_no,
                reason: "triple must have exactly three components",
            })
        }
    };

    let row = row.trim().parse().map_err(|_| LoadError::InvalidFormat {
        line: line_no,
        reason: "row index is not a non-negative integer",
    })?;
    let col = col.trim().parse().map_err(|_| LoadError::InvalidFormat {
        line: line_no,
        reason: "column index is not a non-negative integer",
    })?;
    let value = value.trim().parse().map_err(|_| LoadError::InvalidFormat {
        line: line_no,
        reason: "value is not an integer",
    })?;

    Ok(Triple::new(row, col, value))
}

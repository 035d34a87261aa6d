//! Plain-text rendering of sparse matrices
//!
//! Prints a dimension header followed by one `(row, col) = value` line per
//! stored entry. Entries come out in ascending (row, col) order, which the
//! core guarantees through its ordered storage.

use std::io::{self, Write};

use spmat_core::SparseMatrix;

/// Write a matrix's nonzero entries to the given writer
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &SparseMatrix) -> io::Result<()> {
    let (rows, cols) = matrix.dimensions();
    writeln!(writer, "Matrix ({rows} x {cols}):")?;
    for triple in matrix.iter() {
        writeln!(writer, "({}, {}) = {}", triple.row, triple.col, triple.value)?;
    }
    Ok(())
}

/// Print a matrix's nonzero entries to stdout
pub fn print_matrix(matrix: &SparseMatrix) -> io::Result<()> {
    let stdout = io::stdout();
    write_matrix(&mut stdout.lock(), matrix)
}

/// Render a matrix's nonzero entries to a string
pub fn matrix_to_string(matrix: &SparseMatrix) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec<u8> cannot fail
    write_matrix(&mut buf, matrix).expect("in-memory write");
    String::from_utf8(buf).expect("printer output is UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::Triple;

    fn matrix(rows: usize, cols: usize, triples: &[(usize, usize, i64)]) -> SparseMatrix {
        SparseMatrix::from_triples(rows, cols, triples.iter().map(|&t| Triple::from(t)))
    }

    #[test]
    fn test_write_empty_matrix() {
        let m = SparseMatrix::new(2, 5);
        assert_eq!(matrix_to_string(&m), "Matrix (2 x 5):\n");
    }

    #[test]
    fn test_write_entries_in_ascending_order() {
        let m = matrix(3, 3, &[(2, 2, -4), (0, 1, 3), (0, 0, 1)]);
        assert_eq!(
            matrix_to_string(&m),
            "Matrix (3 x 3):\n(0, 0) = 1\n(0, 1) = 3\n(2, 2) = -4\n"
        );
    }

    #[test]
    fn test_removed_entries_are_not_printed() {
        let mut m = matrix(2, 2, &[(0, 0, 5), (1, 1, 6)]);
        m.set_element(0, 0, 0).unwrap();
        assert_eq!(matrix_to_string(&m), "Matrix (2 x 2):\n(1, 1) = 6\n");
    }
}

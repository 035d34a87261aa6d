//! Sparse integer matrix over a composite-key ordered map
//!
//! Only nonzero entries are stored, keyed by `(row, col)` in ascending
//! lexicographic order. Absence of a key is semantically value 0. The
//! arithmetic operations never mutate their operands; they allocate and
//! return a fresh result.

use alloc::collections::{BTreeMap, BTreeSet};

use crate::error::{MatrixError, Result};
use crate::triple::Triple;

/// Sparse matrix of `i64` values with fixed dimensions
///
/// Dimensions are set at construction and never change; there is no resize
/// operation. Reads are permissive (any absent or out-of-range coordinate
/// reads as 0) while writes are validated against the declared dimensions.
/// That asymmetry is part of the contract, not an oversight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Construct a matrix from an ordered sequence of triples
    ///
    /// Zero-valued triples produce no stored entry. Duplicate coordinates
    /// follow map-assignment semantics: the last value wins. Indices are not
    /// validated against the dimensions here; the input is expected to be
    /// well-formed (the loader collaborator validates the text format, not
    /// the coordinate range).
    pub fn from_triples<I>(rows: usize, cols: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut entries = BTreeMap::new();
        for t in triples {
            if t.value != 0 {
                entries.insert((t.row, t.col), t.value);
            } else {
                entries.remove(&(t.row, t.col));
            }
        }
        Self { rows, cols, entries }
    }

    /// Get the declared row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the declared column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the number of stored nonzero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the matrix stores no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at the specified position
    ///
    /// Returns 0 for any coordinate without a stored entry, including
    /// coordinates outside the declared dimensions. Reads never fail.
    pub fn get_element(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Set the value at the specified position
    ///
    /// Fails with [`MatrixError::OutOfBounds`] when the index reaches or
    /// exceeds a declared dimension. Writing 0 removes the entry if present,
    /// preserving the invariant that no stored value is ever zero.
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }

        Ok(())
    }

    /// Add another matrix, producing a new result matrix
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless both operands
    /// have identical dimensions. Neither operand is mutated.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a + b)
    }

    /// Subtract another matrix, producing a new result matrix
    ///
    /// Same contract as [`SparseMatrix::add`], with subtraction in place of
    /// addition.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a - b)
    }

    /// Elementwise combine: clone self, then fold every nonzero entry of
    /// `other` through the checked setter. Cells where `other` is zero are
    /// already correct from the clone and never revisited; cancellation to
    /// zero deletes the entry.
    fn combine(&self, other: &Self, op: impl Fn(i64, i64) -> i64) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let mut result = self.clone();
        for (&(row, col), &value) in &other.entries {
            let merged = op(result.get_element(row, col), value);
            result.set_element(row, col, merged)?;
        }
        Ok(result)
    }

    /// Multiply by another matrix, producing a new result matrix
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless `self.cols`
    /// equals `other.rows`. The result has dimensions
    /// `self.rows x other.cols`.
    ///
    /// The product is restricted to rows with at least one stored entry in
    /// `self`; within such a row the inner sum ranges only over the stored
    /// columns, so absent coordinates contribute nothing. Runs in
    /// O(nnz(self) * other.cols). Sums that come out zero are never stored.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let occupied_rows: BTreeSet<usize> = self.entries.keys().map(|&(row, _)| row).collect();

        let mut result = Self::new(self.rows, other.cols);
        for &row in &occupied_rows {
            for col in 0..other.cols {
                let mut sum = 0;
                for (k, value) in self.row_entries(row) {
                    sum += value * other.get_element(k, col);
                }
                if sum != 0 {
                    result.set_element(row, col, sum)?;
                }
            }
        }
        Ok(result)
    }

    /// Iterate all stored nonzero entries in ascending (row, col) order
    pub fn iter(&self) -> impl Iterator<Item = Triple> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Triple { row, col, value })
    }

    /// Iterate the stored (col, value) pairs of one row in column order
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.entries
            .range((row, 0)..=(row, usize::MAX))
            .map(|(&(_, col), &value)| (col, value))
    }
}

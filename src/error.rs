//! Error types for sparse matrix construction, access, and arithmetic

use std::fmt;

/// Errors that can occur while building or operating on a sparse matrix
///
/// Every failure is surfaced to the caller as-is; nothing is retried or
/// repaired internally. A failed operation leaves its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SparseMatrixError {
    /// A declared dimension was zero at construction
    InvalidDimension {
        /// Requested row count
        n_rows: usize,
        /// Requested column count
        n_cols: usize,
    },
    /// A row or column index fell outside the declared grid
    OutOfBounds {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Row count of the matrix
        n_rows: usize,
        /// Column count of the matrix
        n_cols: usize,
    },
    /// Operand shapes are incompatible for the attempted operation
    DimensionMismatch {
        /// The operation that was attempted
        op: &'static str,
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },
}

impl fmt::Display for SparseMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparseMatrixError::InvalidDimension { n_rows, n_cols } => write!(
                f,
                "invalid dimensions {}x{}: dimensions greater than 0 required",
                n_rows, n_cols
            ),
            SparseMatrixError::OutOfBounds {
                row,
                col,
                n_rows,
                n_cols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, n_rows, n_cols
            ),
            SparseMatrixError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "{}: dimensions {}x{} and {}x{} do not agree",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
        }
    }
}

impl std::error::Error for SparseMatrixError {}

//! Coordinate-format (COO) sparse matrix implementation

use std::fmt;

use num_traits::Num;

use crate::error::SparseMatrixError;

/// A sparse matrix in coordinate (COO) format
///
/// The matrix stores only its nonzero entries, using three parallel arrays:
/// - rows: row index of each stored entry
/// - cols: column index of each stored entry
/// - values: the stored values
///
/// Coordinates that are not listed read as `T::zero()`. Lookups walk the
/// stored triples front to back until the first match; there is no index
/// acceleration structure, so `get` and `set` cost O(nnz). The declared
/// dimensions are fixed at construction and only change through the
/// shape-changing arithmetic operations and `transpose`.
#[derive(Clone)]
pub struct SparseMatrixCOO<T> {
    /// Number of rows in the matrix (always >= 1)
    n_rows: usize,

    /// Number of columns in the matrix (always >= 1)
    n_cols: usize,

    /// Row indices of stored entries (size: nnz)
    rows: Vec<usize>,

    /// Column indices of stored entries (size: nnz)
    cols: Vec<usize>,

    /// Stored values (size: nnz)
    values: Vec<T>,
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows, must be at least 1
    /// * `n_cols` - Number of columns, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::InvalidDimension` if either dimension
    /// is zero.
    pub fn new(n_rows: usize, n_cols: usize) -> Result<Self, SparseMatrixError> {
        if n_rows < 1 || n_cols < 1 {
            return Err(SparseMatrixError::InvalidDimension { n_rows, n_cols });
        }

        Ok(Self {
            n_rows,
            n_cols,
            rows: Vec::new(),
            cols: Vec::new(),
            values: Vec::new(),
        })
    }

    /// Creates an empty square matrix with `n` rows and columns
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::InvalidDimension` if `n` is zero.
    pub fn square(n: usize) -> Result<Self, SparseMatrixError> {
        Self::new(n, n)
    }

    /// Creates an identity matrix of the given size
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::InvalidDimension` if `n` is zero.
    pub fn identity(n: usize) -> Result<Self, SparseMatrixError> {
        let mut matrix = Self::square(n)?;

        for i in 0..n {
            matrix.rows.push(i);
            matrix.cols.push(i);
            matrix.values.push(T::one());
        }

        Ok(matrix)
    }

    /// Creates a matrix from parallel triplet arrays
    ///
    /// Entries are applied in order through `set`, so duplicate coordinates
    /// collapse to a single stored entry with the last value winning.
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows, must be at least 1
    /// * `n_cols` - Number of columns, must be at least 1
    /// * `rows` - Row index of each entry
    /// * `cols` - Column index of each entry, parallel to `rows`
    /// * `values` - Value of each entry, parallel to `rows`
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::InvalidDimension` if either dimension is
    /// zero, or `SparseMatrixError::OutOfBounds` if any coordinate falls
    /// outside the declared grid.
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - rows.len() must equal cols.len()
    /// - rows.len() must equal values.len()
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, SparseMatrixError> {
        assert_eq!(rows.len(), cols.len(), "rows.len() must equal cols.len()");
        assert_eq!(
            rows.len(),
            values.len(),
            "rows.len() must equal values.len()"
        );

        let mut matrix = Self::new(n_rows, n_cols)?;

        for ((row, col), val) in rows.into_iter().zip(cols).zip(values) {
            matrix.set(row, col, val)?;
        }

        Ok(matrix)
    }

    /// Returns the number of rows in the matrix
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns in the matrix
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns the matrix shape as `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of stored entries in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the stored entries
    ///
    /// Each item is a tuple (row, col, value) in storage order. Storage
    /// order is incidental and carries no meaning.
    pub fn triplet_iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&row, &col), val)| (row, col, val))
    }

    /// Stores `value` at `(row, col)`, overwriting any existing entry there
    ///
    /// The value is stored even when it is zero; only the arithmetic
    /// operations filter exact zeros out of their results.
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::OutOfBounds` if the coordinate falls
    /// outside the declared grid. The matrix is unchanged on error.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), SparseMatrixError> {
        self.check_bounds(row, col)?;

        match self.find_entry(row, col) {
            Some(idx) => self.values[idx] = value,
            None => self.push_entry(row, col, value),
        }

        Ok(())
    }

    /// Returns the value at `(row, col)`, or `T::zero()` if none is stored
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::OutOfBounds` if the coordinate falls
    /// outside the declared grid.
    pub fn get(&self, row: usize, col: usize) -> Result<T, SparseMatrixError> {
        self.check_bounds(row, col)?;

        Ok(self.value_at(row, col))
    }

    /// Transposes the matrix in place
    ///
    /// Every stored entry (r, c) becomes (c, r), and the declared
    /// dimensions swap with the coordinate lists so rectangular matrices
    /// stay self-consistent.
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.rows, &mut self.cols);
        std::mem::swap(&mut self.n_rows, &mut self.n_cols);
    }

    /// Unchecked first-match lookup; callers guarantee the coordinate is
    /// inside the declared grid.
    pub(crate) fn value_at(&self, row: usize, col: usize) -> T {
        match self.find_entry(row, col) {
            Some(idx) => self.values[idx],
            None => T::zero(),
        }
    }

    /// Appends a triple without scanning for duplicates; callers guarantee
    /// the coordinate is in bounds and not already stored.
    pub(crate) fn push_entry(&mut self, row: usize, col: usize, value: T) {
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
    }

    fn find_entry(&self, row: usize, col: usize) -> Option<usize> {
        self.rows
            .iter()
            .zip(&self.cols)
            .position(|(&r, &c)| r == row && c == col)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), SparseMatrixError> {
        if row >= self.n_rows || col >= self.n_cols {
            return Err(SparseMatrixError::OutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }

        Ok(())
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCOO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCOO {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the stored triples
        let max_entries_to_print = 8.min(self.nnz());

        if max_entries_to_print > 0 {
            writeln!(f, "  entries:")?;

            for i in 0..max_entries_to_print {
                writeln!(
                    f,
                    "    ({}, {}) = {:?}",
                    self.rows[i], self.cols[i], self.values[i]
                )?;
            }

            if self.nnz() > max_entries_to_print {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

/// Renders the full dense grid in row-major order: each value followed by
/// a single space, one line per row.
impl<T: Copy + Num + fmt::Display> fmt::Display for SparseMatrixCOO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                write!(f, "{} ", self.value_at(i, j))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

//! Arithmetic over COO matrices
//!
//! Addition, subtraction, and matrix-matrix multiplication walk the full
//! dense grid and read every cell through the linear-scan lookup, storing
//! only results that are exactly nonzero. That O(rows · cols) traversal is
//! part of the container's cost model, chosen for simplicity over
//! sparsity-proportional algorithms. Matrix-vector multiplication is the
//! one sparsity-exploiting path: it visits only the stored triples.
//!
//! Zero filtering is exact (`is_zero()`); there is no tolerance.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Num;

use crate::error::SparseMatrixError;
use crate::matrix::SparseMatrixCOO;

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num + AddAssign,
{
    /// Entrywise sum of two equally-shaped matrices
    ///
    /// Walks every cell of the dense grid; sums that are exactly zero stay
    /// implicit in the result.
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::DimensionMismatch` unless both shapes
    /// are identical.
    pub fn add(&self, other: &Self) -> Result<Self, SparseMatrixError> {
        self.check_same_shape(other, "add")?;

        let mut result = Self::new(self.n_rows(), self.n_cols())?;

        for i in 0..self.n_rows() {
            for j in 0..self.n_cols() {
                let sum = self.value_at(i, j) + other.value_at(i, j);

                if !sum.is_zero() {
                    result.push_entry(i, j, sum);
                }
            }
        }

        Ok(result)
    }

    /// Entrywise difference of two equally-shaped matrices
    ///
    /// Walks every cell of the dense grid; differences that are exactly
    /// zero stay implicit in the result.
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::DimensionMismatch` unless both shapes
    /// are identical.
    pub fn sub(&self, other: &Self) -> Result<Self, SparseMatrixError> {
        self.check_same_shape(other, "subtract")?;

        let mut result = Self::new(self.n_rows(), self.n_cols())?;

        for i in 0..self.n_rows() {
            for j in 0..self.n_cols() {
                let diff = self.value_at(i, j) - other.value_at(i, j);

                if !diff.is_zero() {
                    result.push_entry(i, j, diff);
                }
            }
        }

        Ok(result)
    }

    /// Matrix product `self * other`
    ///
    /// Standard triple-nested accumulation over the dense grid; each output
    /// cell is computed exactly once, and only exactly-nonzero sums are
    /// stored. The result has shape `(self.n_rows(), other.n_cols())`.
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::DimensionMismatch` unless
    /// `self.n_cols() == other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self, SparseMatrixError> {
        if self.n_cols() != other.n_rows() {
            return Err(SparseMatrixError::DimensionMismatch {
                op: "matrix multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut result = Self::new(self.n_rows(), other.n_cols())?;

        for i in 0..self.n_rows() {
            for j in 0..other.n_cols() {
                let mut sum = T::zero();

                for k in 0..self.n_cols() {
                    sum += self.value_at(i, k) * other.value_at(k, j);
                }

                if !sum.is_zero() {
                    result.push_entry(i, j, sum);
                }
            }
        }

        Ok(result)
    }

    /// Matrix-vector product, returning a dense output vector
    ///
    /// One pass over the stored triples, accumulating
    /// `out[row] += value * v[col]` - O(nnz).
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::DimensionMismatch` unless
    /// `self.n_cols() == v.len()`.
    pub fn mul_vector(&self, v: &[T]) -> Result<Vec<T>, SparseMatrixError> {
        if self.n_cols() != v.len() {
            return Err(SparseMatrixError::DimensionMismatch {
                op: "matrix-vector multiply",
                lhs: self.shape(),
                rhs: (v.len(), 1),
            });
        }

        let mut out = vec![T::zero(); self.n_rows()];

        for (row, col, &val) in self.triplet_iter() {
            out[row] += val * v[col];
        }

        Ok(out)
    }

    /// Multiplies by a vector and collapses the receiver to the result
    ///
    /// Computes `self * v`, then reinterprets the receiver as a sparse
    /// column vector: every exactly-nonzero component of the product
    /// becomes a `(row, 0)` entry, the column count becomes 1, and the
    /// prior storage is discarded.
    ///
    /// # Errors
    ///
    /// Returns `SparseMatrixError::DimensionMismatch` unless
    /// `self.n_cols() == v.len()`. The matrix is unchanged on error.
    pub fn mul_vector_assign(&mut self, v: &[T]) -> Result<(), SparseMatrixError> {
        let out = self.mul_vector(v)?;

        let mut result = Self::new(self.n_rows(), 1)?;

        for (i, &component) in out.iter().enumerate() {
            if !component.is_zero() {
                result.push_entry(i, 0, component);
            }
        }

        *self = result;

        Ok(())
    }

    fn check_same_shape(
        &self,
        other: &Self,
        op: &'static str,
    ) -> Result<(), SparseMatrixError> {
        if self.shape() != other.shape() {
            return Err(SparseMatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        Ok(())
    }
}

/// `a + b` for matrix references
///
/// # Panics
///
/// Panics if the operand shapes differ. Use [`SparseMatrixCOO::add`] for a
/// fallible version.
impl<T: Copy + Num + AddAssign> Add for &SparseMatrixCOO<T> {
    type Output = SparseMatrixCOO<T>;

    fn add(self, rhs: Self) -> SparseMatrixCOO<T> {
        match SparseMatrixCOO::add(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a - b` for matrix references
///
/// # Panics
///
/// Panics if the operand shapes differ. Use [`SparseMatrixCOO::sub`] for a
/// fallible version.
impl<T: Copy + Num + AddAssign> Sub for &SparseMatrixCOO<T> {
    type Output = SparseMatrixCOO<T>;

    fn sub(self, rhs: Self) -> SparseMatrixCOO<T> {
        match SparseMatrixCOO::sub(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a * b` for matrix references
///
/// # Panics
///
/// Panics if the inner dimensions differ. Use [`SparseMatrixCOO::matmul`]
/// for a fallible version.
impl<T: Copy + Num + AddAssign> Mul for &SparseMatrixCOO<T> {
    type Output = SparseMatrixCOO<T>;

    fn mul(self, rhs: Self) -> SparseMatrixCOO<T> {
        match SparseMatrixCOO::matmul(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a * v` for a matrix reference and a dense vector slice
///
/// # Panics
///
/// Panics if `v.len()` differs from the column count. Use
/// [`SparseMatrixCOO::mul_vector`] for a fallible version.
impl<T: Copy + Num + AddAssign> Mul<&[T]> for &SparseMatrixCOO<T> {
    type Output = Vec<T>;

    fn mul(self, rhs: &[T]) -> Vec<T> {
        match self.mul_vector(rhs) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a += &b`; the result is built in full before it replaces the receiver
///
/// # Panics
///
/// Panics if the operand shapes differ; the receiver is unchanged.
impl<T: Copy + Num + AddAssign> AddAssign<&SparseMatrixCOO<T>> for SparseMatrixCOO<T> {
    fn add_assign(&mut self, rhs: &SparseMatrixCOO<T>) {
        match SparseMatrixCOO::add(self, rhs) {
            Ok(result) => *self = result,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a -= &b`; the result is built in full before it replaces the receiver
///
/// # Panics
///
/// Panics if the operand shapes differ; the receiver is unchanged.
impl<T: Copy + Num + AddAssign> SubAssign<&SparseMatrixCOO<T>> for SparseMatrixCOO<T> {
    fn sub_assign(&mut self, rhs: &SparseMatrixCOO<T>) {
        match SparseMatrixCOO::sub(self, rhs) {
            Ok(result) => *self = result,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a *= &b`; the receiver takes the product's shape
/// `(a.n_rows(), b.n_cols())`
///
/// # Panics
///
/// Panics if the inner dimensions differ; the receiver is unchanged.
impl<T: Copy + Num + AddAssign> MulAssign<&SparseMatrixCOO<T>> for SparseMatrixCOO<T> {
    fn mul_assign(&mut self, rhs: &SparseMatrixCOO<T>) {
        match SparseMatrixCOO::matmul(self, rhs) {
            Ok(result) => *self = result,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `a *= &v`; collapses the receiver to a sparse column vector, see
/// [`SparseMatrixCOO::mul_vector_assign`]
///
/// # Panics
///
/// Panics if `v.len()` differs from the column count; the receiver is
/// unchanged.
impl<T: Copy + Num + AddAssign> MulAssign<&[T]> for SparseMatrixCOO<T> {
    fn mul_assign(&mut self, rhs: &[T]) {
        if let Err(e) = self.mul_vector_assign(rhs) {
            panic!("{}", e);
        }
    }
}

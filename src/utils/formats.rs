//! Utilities for converting between our COO format and external libraries

use ndarray::Array2;
use num_traits::Num;
use sprs::TriMat;

use crate::error::SparseMatrixError;
use crate::matrix::SparseMatrixCOO;

/// Converts our COO matrix to the sprs triplet format
pub fn to_sprs_triplet<T>(matrix: &SparseMatrixCOO<T>) -> TriMat<T>
where
    T: Copy + Num,
{
    let mut triplet = TriMat::new((matrix.n_rows(), matrix.n_cols()));

    for (row, col, &val) in matrix.triplet_iter() {
        triplet.add_triplet(row, col, val);
    }

    triplet
}

/// Converts an sprs triplet matrix to our COO format
///
/// Duplicate coordinates in the input collapse to a single stored entry
/// with the last value winning.
///
/// # Errors
///
/// Returns `SparseMatrixError::InvalidDimension` if either dimension of
/// the input is zero.
pub fn from_sprs_triplet<T>(triplet: &TriMat<T>) -> Result<SparseMatrixCOO<T>, SparseMatrixError>
where
    T: Copy + Num,
{
    let mut matrix = SparseMatrixCOO::new(triplet.rows(), triplet.cols())?;

    for (&val, (row, col)) in triplet.triplet_iter() {
        matrix.set(row, col, val)?;
    }

    Ok(matrix)
}

/// Converts our COO matrix to a dense ndarray array
pub fn to_dense<T>(matrix: &SparseMatrixCOO<T>) -> Array2<T>
where
    T: Copy + Num,
{
    let mut dense = Array2::zeros((matrix.n_rows(), matrix.n_cols()));

    for (row, col, &val) in matrix.triplet_iter() {
        dense[[row, col]] = val;
    }

    dense
}

/// Converts a dense ndarray array to our COO format, skipping zeros
///
/// # Errors
///
/// Returns `SparseMatrixError::InvalidDimension` if either dimension of
/// the input is zero.
pub fn from_dense<T>(dense: &Array2<T>) -> Result<SparseMatrixCOO<T>, SparseMatrixError>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = dense.dim();
    let mut matrix = SparseMatrixCOO::new(n_rows, n_cols)?;

    for ((row, col), &val) in dense.indexed_iter() {
        if !val.is_zero() {
            // Each cell is visited once, so a raw append cannot duplicate
            matrix.push_entry(row, col, val);
        }
    }

    Ok(matrix)
}

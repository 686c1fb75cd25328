//! Basic tests for matrix construction, access, and display

use coomat::{SparseMatrixCOO, SparseMatrixError};

#[test]
fn test_construction() {
    let matrix = SparseMatrixCOO::<f64>::square(3).unwrap();

    assert_eq!(matrix.n_rows(), 3);
    assert_eq!(matrix.n_cols(), 3);
    assert_eq!(matrix.nnz(), 0);

    let matrix = SparseMatrixCOO::<f64>::new(2, 5).unwrap();

    assert_eq!(matrix.n_rows(), 2);
    assert_eq!(matrix.n_cols(), 5);
}

#[test]
fn test_construction_rejects_zero_dimensions() {
    assert!(matches!(
        SparseMatrixCOO::<f64>::square(0),
        Err(SparseMatrixError::InvalidDimension { n_rows: 0, n_cols: 0 })
    ));
    assert!(matches!(
        SparseMatrixCOO::<f64>::new(0, 3),
        Err(SparseMatrixError::InvalidDimension { .. })
    ));
    assert!(matches!(
        SparseMatrixCOO::<f64>::new(3, 0),
        Err(SparseMatrixError::InvalidDimension { .. })
    ));
}

#[test]
fn test_fresh_matrix_reads_zero_everywhere() {
    let matrix = SparseMatrixCOO::<f64>::square(3).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(matrix.get(i, j).unwrap(), 0.0);
        }
    }
}

#[test]
fn test_access_rejects_out_of_bounds() {
    let matrix = SparseMatrixCOO::<f64>::square(3).unwrap();

    assert!(matches!(
        matrix.get(3, 0),
        Err(SparseMatrixError::OutOfBounds { row: 3, col: 0, .. })
    ));
    assert!(matches!(
        matrix.get(0, 3),
        Err(SparseMatrixError::OutOfBounds { .. })
    ));
    assert!(matches!(
        matrix.get(usize::MAX, 0),
        Err(SparseMatrixError::OutOfBounds { .. })
    ));
}

#[test]
fn test_set_get_roundtrip() {
    let mut matrix = SparseMatrixCOO::<f64>::square(3).unwrap();

    matrix.set(1, 1, 5.0).unwrap();

    assert_eq!(matrix.get(1, 1).unwrap(), 5.0);
    assert_eq!(matrix.nnz(), 1);
}

#[test]
fn test_repeated_set_does_not_double_count() {
    let mut matrix = SparseMatrixCOO::<f64>::square(2).unwrap();

    matrix.set(0, 0, 5.0).unwrap();
    matrix.set(0, 0, 3.0).unwrap();

    assert_eq!(matrix.nnz(), 1);

    // A sum over the matrix sees the overwritten value exactly once
    let sum = matrix.add(&matrix).unwrap();
    assert_eq!(sum.get(0, 0).unwrap(), 6.0);
}

#[test]
fn test_copy_independence() {
    let mut a = SparseMatrixCOO::<f64>::square(2).unwrap();
    a.set(0, 0, 1.0).unwrap();

    let mut b = a.clone();
    b.set(0, 0, 9.0).unwrap();

    assert_eq!(a.get(0, 0).unwrap(), 1.0);
    assert_eq!(b.get(0, 0).unwrap(), 9.0);

    // And the other direction
    a.set(1, 1, 2.0).unwrap();
    assert_eq!(b.get(1, 1).unwrap(), 0.0);
}

#[test]
fn test_identity_constructor() {
    let identity = SparseMatrixCOO::<f64>::identity(4).unwrap();

    assert_eq!(identity.nnz(), 4);
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(identity.get(i, j).unwrap(), expected);
        }
    }
}

#[test]
fn test_display_golden_output() {
    let mut matrix = SparseMatrixCOO::<i32>::square(3).unwrap();
    matrix.set(0, 0, 1).unwrap();
    matrix.set(1, 1, 1).unwrap();
    matrix.set(2, 2, 1).unwrap();

    let expected = "1 0 0 \n0 1 0 \n0 0 1 \n";
    assert_eq!(format!("{}", matrix), expected);
}

#[test]
fn test_error_display_is_descriptive() {
    let err = SparseMatrixCOO::<f64>::square(0).unwrap_err();
    assert!(err.to_string().contains("greater than 0"));

    let matrix = SparseMatrixCOO::<f64>::square(2).unwrap();
    let err = matrix.get(5, 0).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));

    let other = SparseMatrixCOO::<f64>::new(3, 2).unwrap();
    let err = matrix.add(&other).unwrap_err();
    assert!(err.to_string().contains("do not agree"));
}

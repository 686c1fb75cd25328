//! Benchmarks for sparse matrix arithmetic

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coomat::SparseMatrixCOO;

/// Create a diagonal matrix for benchmarking
fn create_diagonal_matrix(n: usize, value: f64) -> SparseMatrixCOO<f64> {
    let mut matrix = SparseMatrixCOO::square(n).unwrap();

    for i in 0..n {
        matrix.set(i, i, value).unwrap();
    }

    matrix
}

/// Create a tridiagonal matrix for benchmarking
fn create_tridiagonal_matrix(n: usize) -> SparseMatrixCOO<f64> {
    let mut matrix = SparseMatrixCOO::square(n).unwrap();

    for i in 0..n {
        if i > 0 {
            matrix.set(i, i - 1, 1.0).unwrap();
        }

        matrix.set(i, i, 2.0).unwrap();

        if i < n - 1 {
            matrix.set(i, i + 1, 1.0).unwrap();
        }
    }

    matrix
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let a = create_tridiagonal_matrix(32);
    let b = create_diagonal_matrix(32, 2.0);

    c.bench_function("matmul_tridiagonal_32", |bench| {
        bench.iter(|| black_box(&a).matmul(black_box(&b)).unwrap())
    });
}

fn bench_matrix_add(c: &mut Criterion) {
    let a = create_tridiagonal_matrix(32);
    let b = create_diagonal_matrix(32, 3.0);

    c.bench_function("add_tridiagonal_32", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)).unwrap())
    });
}

fn bench_matrix_vector(c: &mut Criterion) {
    let a = create_tridiagonal_matrix(256);
    let v = vec![1.0; 256];

    c.bench_function("mul_vector_tridiagonal_256", |bench| {
        bench.iter(|| black_box(&a).mul_vector(black_box(&v)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_matrix_multiply,
    bench_matrix_add,
    bench_matrix_vector
);
criterion_main!(benches);

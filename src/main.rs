use coomat::{SparseMatrixCOO, SparseMatrixError, VERSION};

fn main() -> Result<(), SparseMatrixError> {
    println!("coomat {}: coordinate-format sparse matrix demo", VERSION);

    // Build a 3x3 identity entry by entry
    let mut identity = SparseMatrixCOO::<f64>::square(3)?;
    for i in 0..3 {
        identity.set(i, i, 1.0)?;
    }

    println!("\nIdentity ({} stored entries):", identity.nnz());
    print!("{}", identity);

    // Copies are independent; doubling the copy leaves the original alone
    let mut doubled = identity.clone();
    doubled += &identity;

    println!("\nDoubled identity:");
    print!("{}", doubled);

    // Multiplying by the doubled identity scales every entry by two
    let mut matrix = SparseMatrixCOO::<f64>::square(3)?;
    matrix.set(0, 1, 4.0)?;
    matrix.set(1, 2, -2.5)?;
    matrix.set(2, 0, 1.0)?;

    println!("\nMatrix A:");
    print!("{}", matrix);

    let product = matrix.matmul(&doubled)?;
    println!("\nA * 2I:");
    print!("{}", product);

    // Matrix-vector product returns a dense vector
    let vector = vec![1.0, 2.0, 3.0];
    let out = matrix.mul_vector(&vector)?;
    println!("\nA * {:?} = {:?}", vector, out);

    // Transposing a rectangular matrix swaps its dimensions
    let mut rect = SparseMatrixCOO::<f64>::new(2, 3)?;
    rect.set(0, 2, 7.0)?;
    rect.set(1, 0, 5.0)?;

    println!("\nRectangular B ({}x{}):", rect.n_rows(), rect.n_cols());
    print!("{}", rect);

    rect.transpose();

    println!("\nB transposed ({}x{}):", rect.n_rows(), rect.n_cols());
    print!("{}", rect);

    Ok(())
}

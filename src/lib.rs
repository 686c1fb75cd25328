//! # coomat: coordinate-format sparse matrices
//!
//! A generic sparse-matrix container that stores only nonzero entries as
//! `(row, col, value)` triples, with element access, arithmetic, and
//! transpose.
//!
//! ## Overview
//!
//! The container deliberately keeps a simple cost model:
//!
//! - Element access (`get`/`set`) is a first-match linear scan over the
//!   stored triples - O(nnz), with no index acceleration structure.
//! - Addition, subtraction, and matrix-matrix multiplication traverse the
//!   full dense grid regardless of sparsity, storing only results that are
//!   exactly nonzero.
//! - Matrix-vector multiplication is the one sparsity-exploiting path,
//!   visiting only the stored triples.
//!
//! Zero comparison is exact; values that an arithmetic step makes exactly
//! zero are dropped from the result, never stored.
//!
//! ## Usage
//!
//! Basic construction and arithmetic:
//!
//! ```
//! use coomat::SparseMatrixCOO;
//!
//! let mut a = SparseMatrixCOO::<f64>::square(3)?;
//! a.set(0, 0, 2.0)?;
//! a.set(1, 2, -1.0)?;
//!
//! let identity = SparseMatrixCOO::identity(3)?;
//! let sum = a.add(&identity)?;
//! assert_eq!(sum.get(0, 0)?, 3.0);
//!
//! let product = sum.mul_vector(&[1.0, 1.0, 1.0])?;
//! assert_eq!(product, vec![3.0, 0.0, 1.0]);
//! # Ok::<(), coomat::SparseMatrixError>(())
//! ```
//!
//! Operator forms mirror the fallible methods and panic on shape
//! mismatches:
//!
//! ```
//! use coomat::SparseMatrixCOO;
//!
//! let identity = SparseMatrixCOO::<f64>::identity(2)?;
//! let mut doubled = identity.clone();
//! doubled += &identity;
//! assert_eq!(doubled.get(1, 1)?, 2.0);
//! # Ok::<(), coomat::SparseMatrixError>(())
//! ```

pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::SparseMatrixError;
pub use matrix::SparseMatrixCOO;
pub use utils::{from_dense, from_sprs_triplet, to_dense, to_sprs_triplet};

/// Version information for the coomat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

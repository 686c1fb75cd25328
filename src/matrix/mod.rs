// Matrix data structure and arithmetic

pub mod arithmetic;
pub mod coo;

pub use coo::SparseMatrixCOO;

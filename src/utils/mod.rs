// Interop utilities

pub mod formats;

pub use formats::{from_dense, from_sprs_triplet, to_dense, to_sprs_triplet};

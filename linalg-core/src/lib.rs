//! Dense, real-valued vector and matrix primitives.
//!
//! `Vector` and `Matrix` are plain owned value types: every operation either
//! mutates its receiver (the `*_inplace` methods) or returns a freshly
//! allocated, independent result. Fallible operations validate their inputs
//! before touching any storage and report failures through [`LinalgError`].

pub mod error;
pub mod matrix;
pub mod ops;
pub mod vector;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::LinalgError;
pub use matrix::Matrix;
pub use vector::Vector;

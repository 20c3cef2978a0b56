// src/vector/mod.rs

use crate::error::LinalgError;
use log::{debug, trace};
use std::slice::Iter;

mod arithmetic;
mod create;
mod traits;

pub(crate) use traits::write_values;

/// A fixed-dimension, dense sequence of `f64` values.
///
/// The dimension is always at least 1 and always equals the length of the
/// underlying storage. It only changes through [`Vector::resize`].
///
/// `Clone` is a deep copy: the clone owns its own storage and mutating it
/// never affects the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates a zero-filled vector of dimension `dim`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimension` if `dim` is 0.
    pub fn new(dim: usize) -> Result<Self, LinalgError> {
        check_dim(dim, "Vector::new")?;
        Ok(Vector { data: vec![0.0; dim] })
    }

    /// Creates a vector that takes ownership of `data`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimension` if `data` is empty.
    pub fn from_vec(data: Vec<f64>) -> Result<Self, LinalgError> {
        check_dim(data.len(), "Vector::from_vec")?;
        Ok(Vector { data })
    }

    /// Builds a vector from storage already known to be non-empty.
    pub(crate) fn from_vec_unchecked(data: Vec<f64>) -> Self {
        debug_assert!(!data.is_empty(), "Vector storage must not be empty");
        Vector { data }
    }

    /// Returns the dimension (number of elements).
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `index >= self.dim()`.
    pub fn get(&self, index: usize) -> Result<f64, LinalgError> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Sets the value at `index` to `value`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `index >= self.dim()`.
    /// The vector is left untouched in that case.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), LinalgError> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Changes the dimension of the vector by reallocating its storage.
    ///
    /// Values at indices `0..min(old_dim, new_dim)` are kept. When growing,
    /// the new trailing entries are `0.0`; when shrinking, the dropped
    /// trailing entries are lost.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimension` if `new_dim` is 0.
    pub fn resize(&mut self, new_dim: usize) -> Result<(), LinalgError> {
        check_dim(new_dim, "Vector::resize")?;
        trace!("Vector::resize: {} -> {}", self.dim(), new_dim);
        let keep = self.dim().min(new_dim);
        let mut data = vec![0.0; new_dim];
        data[..keep].copy_from_slice(&self.data[..keep]);
        self.data = data;
        Ok(())
    }

    /// Borrows the values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterates over the values in index order.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    /// Consumes the vector and returns its storage.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), LinalgError> {
        if index >= self.data.len() {
            debug!("Vector: index {} out of bounds for dim {}", index, self.data.len());
            return Err(LinalgError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.data.len()],
            });
        }
        Ok(())
    }

    /// Fails with `DimensionMismatch` unless `other` has the same dimension.
    pub(crate) fn check_same_dim(&self, other: &Vector, operation: &str) -> Result<(), LinalgError> {
        if self.dim() != other.dim() {
            debug!(
                "{}: dimension mismatch ({} vs {})",
                operation,
                self.dim(),
                other.dim()
            );
            return Err(LinalgError::DimensionMismatch {
                expected: vec![self.dim()],
                actual: vec![other.dim()],
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}

/// Rejects a zero dimension for the named operation.
pub(crate) fn check_dim(dim: usize, operation: &str) -> Result<(), LinalgError> {
    if dim == 0 {
        debug!("{}: rejected dimension 0", operation);
        return Err(LinalgError::InvalidDimension {
            dim,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

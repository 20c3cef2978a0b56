// src/matrix/create.rs

use super::{check_shape, Matrix};
use crate::error::LinalgError;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

impl Matrix {
    /// Returns the `dim x dim` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimension` if `dim` is 0 or `dim * dim`
    /// does not fit in `usize`.
    pub fn identity(dim: usize) -> Result<Self, LinalgError> {
        let len = check_shape(dim, dim, "Matrix::identity")?;
        let mut data = vec![0.0; len];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Ok(Matrix {
            data,
            rows: dim,
            cols: dim,
        })
    }

    /// Creates a matrix of values drawn uniformly from `[0, 1)`.
    pub fn rand(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Self::rand_with_rng(rows, cols, &mut rand::thread_rng())
    }

    pub fn rand_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        let len = check_shape(rows, cols, "Matrix::rand")?;
        let data: Vec<f64> = (0..len).map(|_| rng.gen::<f64>()).collect();
        Ok(Matrix { data, rows, cols })
    }

    /// Creates a matrix of values drawn from the standard normal distribution.
    pub fn randn(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Self::randn_with_rng(rows, cols, &mut rand::thread_rng())
    }

    pub fn randn_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        let len = check_shape(rows, cols, "Matrix::randn")?;
        let data: Vec<f64> = (0..len)
            .map(|_| -> f64 { StandardNormal.sample(&mut *rng) })
            .collect();
        Ok(Matrix { data, rows, cols })
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;

// src/vector/arithmetic.rs

use super::Vector;
use crate::error::LinalgError;

// Each primitive comes as a pair: `*_inplace` mutates `self`, the plain
// name leaves `self` untouched and returns a new vector.
impl Vector {
    /// Adds `d` to every element of `self`.
    pub fn add_scalar_inplace(&mut self, d: f64) {
        self.data.iter_mut().for_each(|x| *x += d);
    }

    /// Returns a new vector with `d` added to every element.
    pub fn add_scalar(&self, d: f64) -> Vector {
        let mut result = self.clone();
        result.add_scalar_inplace(d);
        result
    }

    /// Multiplies every element of `self` by `d`.
    pub fn mul_scalar_inplace(&mut self, d: f64) {
        self.data.iter_mut().for_each(|x| *x *= d);
    }

    /// Returns a new vector with every element multiplied by `d`.
    pub fn mul_scalar(&self, d: f64) -> Vector {
        let mut result = self.clone();
        result.mul_scalar_inplace(d);
        result
    }

    /// Performs `self[i] += other[i]` for every index.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the dimensions differ;
    /// `self` is not modified in that case.
    pub fn add_elementwise_inplace(&mut self, other: &Vector) -> Result<(), LinalgError> {
        self.check_same_dim(other, "add_elementwise_inplace")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += *b;
        }
        Ok(())
    }

    /// Returns `self + other` computed elementwise.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the dimensions differ.
    pub fn add_elementwise(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_dim(other, "add_elementwise")?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// Performs `self[i] *= other[i]` for every index.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the dimensions differ;
    /// `self` is not modified in that case.
    pub fn mul_elementwise_inplace(&mut self, other: &Vector) -> Result<(), LinalgError> {
        self.check_same_dim(other, "mul_elementwise_inplace")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a *= *b;
        }
        Ok(())
    }

    /// Returns the elementwise (Hadamard) product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the dimensions differ.
    pub fn mul_elementwise(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_dim(other, "mul_elementwise")?;
        Ok(self.zip_map(other, |a, b| a * b))
    }

    /// Inner product of `self` and `other`.
    /// See [`crate::ops::linalg::inner_product`].
    pub fn dot(&self, other: &Vector) -> Result<f64, LinalgError> {
        crate::ops::linalg::inner_product(self, other)
    }

    // Caller has already checked the dimensions.
    fn zip_map<F>(&self, other: &Vector, f: F) -> Vector
    where
        F: Fn(f64, f64) -> f64,
    {
        Vector::from_vec_unchecked(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;

// src/ops/linalg/inner_product.rs

use crate::error::LinalgError;
use crate::vector::Vector;

/// Computes the inner product `sum_i v1[i] * v2[i]`.
///
/// Terms are accumulated in ascending index order.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if `v1` and `v2` have different
/// dimensions.
pub fn inner_product(v1: &Vector, v2: &Vector) -> Result<f64, LinalgError> {
    v1.check_same_dim(v2, "inner_product")?;
    let mut sum = 0.0;
    for (a, b) in v1.iter().zip(v2.iter()) {
        sum += a * b;
    }
    Ok(sum)
}

#[cfg(test)]
#[path = "inner_product_test.rs"]
mod tests;

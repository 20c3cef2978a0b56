// src/ops/linalg/matmul.rs

use crate::error::LinalgError;
use crate::matrix::{check_shape, Matrix};
use crate::vector::Vector;
use log::{debug, trace};

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// `C[i][j] = sum_k A[i][k] * B[k][j]`, accumulated in ascending `k`.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if `a.num_cols() != b.num_rows()`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
    let (m, k) = a.shape();
    let (b_rows, n) = b.shape();

    if k != b_rows {
        debug!(
            "matmul: cannot multiply ({}, {}) by ({}, {})",
            m, k, b_rows, n
        );
        return Err(LinalgError::DimensionMismatch {
            expected: vec![k, n],
            actual: vec![b_rows, n],
            operation: "matmul".to_string(),
        });
    }
    trace!("matmul: ({}, {}) x ({}, {})", m, k, b_rows, n);

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let len = check_shape(m, n, "matmul")?;
    let mut output_data = vec![0.0; len];

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }
    Ok(Matrix::from_vec_unchecked(m, n, output_data))
}

/// Multiplies matrix `m` by the column vector `v`.
/// M: [R, C], v: [C] -> result: [R]
///
/// `result[i] = sum_j M[i][j] * v[j]`, accumulated in ascending `j`.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if `m.num_cols() != v.dim()`.
pub fn matvec(m: &Matrix, v: &Vector) -> Result<Vector, LinalgError> {
    let (rows, cols) = m.shape();

    if cols != v.dim() {
        debug!(
            "matvec: cannot multiply ({}, {}) by vector of dim {}",
            rows,
            cols,
            v.dim()
        );
        return Err(LinalgError::DimensionMismatch {
            expected: vec![cols],
            actual: vec![v.dim()],
            operation: "matvec".to_string(),
        });
    }
    trace!("matvec: ({}, {}) x ({})", rows, cols, v.dim());

    let v_data = v.as_slice();
    let output_data = (0..rows)
        .map(|i| {
            let mut sum = 0.0;
            for (a, b) in m.row_slice(i).iter().zip(v_data.iter()) {
                sum += a * b;
            }
            sum
        })
        .collect();
    Ok(Vector::from_vec_unchecked(output_data))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;

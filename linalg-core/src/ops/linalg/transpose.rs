// src/ops/linalg/transpose.rs

use crate::matrix::Matrix;
use log::trace;

/// Returns a new `(cols x rows)` matrix with `result[c][r] = m[r][c]`.
///
/// The input is not modified and shares no storage with the result.
pub fn transpose(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    trace!("transpose: ({}, {}) -> ({}, {})", rows, cols, cols, rows);

    let input = m.as_slice();
    let mut result_data = vec![0.0; input.len()];
    for i in 0..rows {
        for j in 0..cols {
            result_data[j * rows + i] = input[i * cols + j];
        }
    }
    Matrix::from_vec_unchecked(cols, rows, result_data)
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;

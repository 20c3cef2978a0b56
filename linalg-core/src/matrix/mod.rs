// src/matrix/mod.rs

use crate::error::LinalgError;
use crate::vector::{check_dim, Vector};
use log::debug;

mod create;
mod traits;

/// A dense `rows x cols` grid of `f64` values stored in row-major order.
///
/// Both dimensions are at least 1 and are fixed for the lifetime of the
/// matrix. Derived matrices (transpose, identity, products) are always
/// freshly allocated and never share storage with their inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidDimension` if either dimension is 0 or
    /// `rows * cols` does not fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        let len = check_shape(rows, cols, "Matrix::new")?;
        Ok(Matrix {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Creates a matrix from row-major `data`.
    ///
    /// # Errors
    ///
    /// * `LinalgError::InvalidDimension` if either dimension is 0 or
    ///   `rows * cols` overflows.
    /// * `LinalgError::DimensionMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, LinalgError> {
        let len = check_shape(rows, cols, "Matrix::from_vec")?;
        if data.len() != len {
            debug!(
                "Matrix::from_vec: {} values do not fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            );
            return Err(LinalgError::DimensionMismatch {
                expected: vec![len],
                actual: vec![data.len()],
                operation: "Matrix::from_vec".to_string(),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// * `LinalgError::InvalidDimension` if there are no rows or the first
    ///   row is empty.
    /// * `LinalgError::DimensionMismatch` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinalgError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        let len = check_shape(n_rows, n_cols, "Matrix::from_rows")?;

        let mut data = Vec::with_capacity(len);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                debug!(
                    "Matrix::from_rows: row {} has {} values, expected {}",
                    r,
                    row.len(),
                    n_cols
                );
                return Err(LinalgError::DimensionMismatch {
                    expected: vec![n_cols],
                    actual: vec![row.len()],
                    operation: "Matrix::from_rows".to_string(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major view of the storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the value at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        self.check_index(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Sets the value at (`row`, `col`) to `value`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if either index is out of
    /// range. The matrix is left untouched in that case.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), LinalgError> {
        self.check_index(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Returns a copy of row `row` as a new vector of dimension `num_cols()`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `row >= num_rows()`.
    pub fn get_row(&self, row: usize) -> Result<Vector, LinalgError> {
        if row >= self.rows {
            debug!("Matrix::get_row: row {} out of bounds for {} rows", row, self.rows);
            return Err(LinalgError::IndexOutOfBounds {
                index: vec![row],
                shape: vec![self.rows],
            });
        }
        Ok(Vector::from_vec_unchecked(self.row_slice(row).to_vec()))
    }

    /// Returns a copy of column `col` as a new vector of dimension `num_rows()`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `col >= num_cols()`.
    pub fn get_col(&self, col: usize) -> Result<Vector, LinalgError> {
        if col >= self.cols {
            debug!("Matrix::get_col: column {} out of bounds for {} columns", col, self.cols);
            return Err(LinalgError::IndexOutOfBounds {
                index: vec![col],
                shape: vec![self.cols],
            });
        }
        let values = (0..self.rows).map(|r| self.data[self.offset(r, col)]).collect();
        Ok(Vector::from_vec_unchecked(values))
    }

    /// Transpose. See [`crate::ops::linalg::transpose`].
    pub fn transpose(&self) -> Matrix {
        crate::ops::linalg::transpose(self)
    }

    /// Matrix product `self x other`. See [`crate::ops::linalg::matmul`].
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        crate::ops::linalg::matmul(self, other)
    }

    /// Matrix-vector product `self x v`. See [`crate::ops::linalg::matvec`].
    pub fn matvec(&self, v: &Vector) -> Result<Vector, LinalgError> {
        crate::ops::linalg::matvec(self, v)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Builds a matrix from storage whose length is known to be `rows * cols`.
    pub(crate) fn from_vec_unchecked(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0, "Matrix dimensions must be positive");
        debug_assert_eq!(data.len(), rows * cols, "Matrix storage length mismatch");
        Matrix { data, rows, cols }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), LinalgError> {
        if row >= self.rows || col >= self.cols {
            debug!(
                "Matrix: index ({}, {}) out of bounds for shape ({}, {})",
                row, col, self.rows, self.cols
            );
            return Err(LinalgError::IndexOutOfBounds {
                index: vec![row, col],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(())
    }
}

/// Validates a `rows x cols` shape and returns its element count.
///
/// Fails with `InvalidDimension` on a zero dimension or when the element
/// count does not fit in `usize`.
pub(crate) fn check_shape(
    rows: usize,
    cols: usize,
    operation: &str,
) -> Result<usize, LinalgError> {
    check_dim(rows, operation)?;
    check_dim(cols, operation)?;
    rows.checked_mul(cols).ok_or_else(|| {
        debug!("{}: {} x {} elements overflow usize", operation, rows, cols);
        LinalgError::InvalidDimension {
            dim: cols,
            operation: format!(
                "{} ({} x {} elements overflow usize)",
                operation, rows, cols
            ),
        }
    })
}

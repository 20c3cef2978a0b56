use thiserror::Error;

/// Custom error type for vector and matrix operations.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum LinalgError {
    #[error("Invalid dimension {dim} for operation {operation}")]
    InvalidDimension { dim: usize, operation: String },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    DimensionMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Malformed vector initialization: could not parse {token:?} in {input:?}")]
    ParseError { token: String, input: String },
}

use crate::matrix::Matrix;
use crate::vector::Vector;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper to create a vector from literal values in tests.
pub(crate) fn vector(values: &[f64]) -> Vector {
    Vector::from_vec(values.to_vec()).expect("Failed to create test vector")
}

/// Helper to create a matrix from literal rows in tests.
pub(crate) fn matrix(rows: &[&[f64]]) -> Matrix {
    let rows: Vec<Vec<f64>> = rows.iter().map(|row| row.to_vec()).collect();
    Matrix::from_rows(&rows).expect("Failed to create test matrix")
}

/// Deterministic generator so randomised checks are reproducible.
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Checks that a vector has the expected values within tolerance.
/// Panics on a dimension or value mismatch.
pub(crate) fn check_vector_near(actual: &Vector, expected: &[f64], tolerance: f64) {
    assert_eq!(actual.dim(), expected.len(), "Dimension mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

use linalg_core::{Matrix, Vector};

// Added allow(dead_code) because each test crate uses a different subset.
#[allow(dead_code)]
pub fn create_test_vector(values: &[f64]) -> Vector {
    Vector::from_vec(values.to_vec()).expect("Test vector creation failed")
}

#[allow(dead_code)]
pub fn create_test_matrix(rows: usize, cols: usize, data: Vec<f64>) -> Matrix {
    Matrix::from_vec(rows, cols, data).expect("Test matrix creation failed")
}

use linalg_core::ops::linalg::{matmul, matvec, transpose};
use linalg_core::{LinalgError, Matrix, Vector};

mod common;
use common::{create_test_matrix, create_test_vector};

#[test]
fn test_matmul_example() -> Result<(), LinalgError> {
    let a = create_test_matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = create_test_matrix(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    let c = matmul(&a, &b)?;
    assert_eq!(c, create_test_matrix(2, 2, vec![58.0, 64.0, 139.0, 154.0]));
    assert_eq!(c.to_string(), "[ 58.000 64.000 ]\n[ 139.000 154.000 ]");
    Ok(())
}

#[test]
fn test_matmul_mismatch() {
    let a = Matrix::new(2, 3).expect("valid shape");
    let b = Matrix::new(4, 2).expect("valid shape");
    assert!(matches!(matmul(&a, &b), Err(LinalgError::DimensionMismatch { .. })));
}

#[test]
fn test_row_extraction_feeds_vector_ops() -> Result<(), LinalgError> {
    let m = create_test_matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let row = m.get_row(0)?;
    let doubled = row.mul_scalar(2.0);
    assert_eq!(doubled, create_test_vector(&[2.0, 4.0]));
    assert_eq!(m.get(0, 0)?, 1.0);
    Ok(())
}

#[test]
fn test_matvec_with_identity() -> Result<(), LinalgError> {
    let v = Vector::randn(5)?;
    assert_eq!(matvec(&Matrix::identity(5)?, &v)?, v);
    Ok(())
}

#[test]
fn test_transpose_of_product() -> Result<(), LinalgError> {
    let a = Matrix::rand(3, 2)?;
    let b = Matrix::rand(2, 4)?;
    let lhs = transpose(&matmul(&a, &b)?);
    let rhs = matmul(&transpose(&b), &transpose(&a))?;
    assert!(approx::relative_eq!(lhs, rhs, epsilon = 1e-12));
    Ok(())
}

#[test]
fn test_out_of_bounds_leaves_matrix_unmodified() -> Result<(), LinalgError> {
    let mut m = Matrix::identity(2)?;
    assert!(matches!(m.set(2, 2, 5.0), Err(LinalgError::IndexOutOfBounds { .. })));
    assert!(matches!(m.get(0, 2), Err(LinalgError::IndexOutOfBounds { .. })));
    assert!(matches!(m.get_row(2), Err(LinalgError::IndexOutOfBounds { .. })));
    assert_eq!(m, Matrix::identity(2)?);
    Ok(())
}

use crate::error::LinalgError;
use crate::test_utils::{seeded_rng, vector};
use crate::vector::Vector;

#[test]
fn test_add_scalar_inplace() {
    let mut v = vector(&[1.0, 2.0, 3.0]);
    v.add_scalar_inplace(10.0);
    assert_eq!(v, vector(&[11.0, 12.0, 13.0]));
}

#[test]
fn test_add_scalar_leaves_receiver_unchanged() -> Result<(), LinalgError> {
    let mut rng = seeded_rng(7);
    for dim in 1..10 {
        let v = Vector::randn_with_rng(dim, &mut rng)?;
        let before = v.clone();
        let d = -2.5;
        let result = v.add_scalar(d);
        for i in 0..dim {
            assert_eq!(result.get(i)?, v.get(i)? + d);
        }
        assert_eq!(v, before);
    }
    Ok(())
}

#[test]
fn test_mul_scalar_inplace() {
    let mut v = vector(&[1.0, -2.0, 0.5]);
    v.mul_scalar_inplace(2.0);
    assert_eq!(v, vector(&[2.0, -4.0, 1.0]));
}

#[test]
fn test_mul_scalar() {
    let v = vector(&[1.0, -2.0, 0.5]);
    let result = v.mul_scalar(-3.0);
    assert_eq!(result, vector(&[-3.0, 6.0, -1.5]));
    assert_eq!(v, vector(&[1.0, -2.0, 0.5]));
}

#[test]
fn test_add_elementwise_inplace() -> Result<(), LinalgError> {
    let mut a = vector(&[1.0, 2.0, 3.0]);
    let b = vector(&[10.0, 20.0, 30.0]);
    a.add_elementwise_inplace(&b)?;
    assert_eq!(a, vector(&[11.0, 22.0, 33.0]));
    assert_eq!(b, vector(&[10.0, 20.0, 30.0]));
    Ok(())
}

#[test]
fn test_add_elementwise() -> Result<(), LinalgError> {
    let a = vector(&[1.0, 2.0]);
    let b = vector(&[0.5, -2.0]);
    let sum = a.add_elementwise(&b)?;
    assert_eq!(sum, vector(&[1.5, 0.0]));
    assert_eq!(a, vector(&[1.0, 2.0]));
    Ok(())
}

#[test]
fn test_add_elementwise_mismatch() {
    let mut a = vector(&[1.0, 2.0]);
    let b = vector(&[1.0, 2.0, 3.0]);
    assert_eq!(
        a.add_elementwise(&b),
        Err(LinalgError::DimensionMismatch {
            expected: vec![2],
            actual: vec![3],
            operation: "add_elementwise".to_string(),
        })
    );
    let result = a.add_elementwise_inplace(&b);
    assert!(matches!(result, Err(LinalgError::DimensionMismatch { .. })));
    assert_eq!(a, vector(&[1.0, 2.0]));
}

#[test]
fn test_mul_elementwise_inplace() -> Result<(), LinalgError> {
    let mut a = vector(&[1.0, 2.0, 3.0]);
    a.mul_elementwise_inplace(&vector(&[2.0, 0.0, -1.0]))?;
    assert_eq!(a, vector(&[2.0, 0.0, -3.0]));
    Ok(())
}

#[test]
fn test_mul_elementwise() -> Result<(), LinalgError> {
    let a = vector(&[4.0, 5.0]);
    let product = a.mul_elementwise(&vector(&[0.5, 2.0]))?;
    assert_eq!(product, vector(&[2.0, 10.0]));
    assert_eq!(a, vector(&[4.0, 5.0]));
    Ok(())
}

#[test]
fn test_mul_elementwise_mismatch() {
    let mut a = vector(&[1.0]);
    let b = vector(&[1.0, 2.0]);
    assert!(matches!(a.mul_elementwise(&b), Err(LinalgError::DimensionMismatch { .. })));
    assert!(matches!(
        a.mul_elementwise_inplace(&b),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    assert_eq!(a, vector(&[1.0]));
}

#[test]
fn test_dot() -> Result<(), LinalgError> {
    let a = vector(&[1.0, 2.0, 3.0]);
    let b = vector(&[4.0, 5.0, 6.0]);
    assert_eq!(a.dot(&b)?, 32.0);
    Ok(())
}

use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.data(), 6.0);
    assert_eq!(c.operation(), Some(Operation::Mul));
}

#[test]
fn test_mul_backward() -> Result<(), GradError> {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    c.backward()?;
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_mul_square_of_same_node() -> Result<(), GradError> {
    // d(a*a)/da = 2a; a total-product/value division would only give a.
    let a = Value::new(5.0);
    let c = &a * &a;
    c.backward()?;
    assert_eq!(a.grad(), 10.0);
    Ok(())
}

#[test]
fn test_mul_with_zero_operand() -> Result<(), GradError> {
    let a = Value::new(0.0);
    let b = Value::new(4.0);
    let c = Value::new(-2.0);
    let p = product_op(&[a.clone(), b.clone(), c.clone()])?;
    assert_eq!(p.data(), 0.0);
    p.backward()?;
    assert_eq!(a.grad(), -8.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(c.grad(), 0.0);
    Ok(())
}

#[test]
fn test_product_op_three_operands() -> Result<(), GradError> {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = Value::new(4.0);
    let p = product_op(&[a.clone(), b.clone(), c.clone()])?;
    assert_eq!(p.data(), 24.0);
    p.backward()?;
    assert_eq!(a.grad(), 12.0);
    assert_eq!(b.grad(), 8.0);
    assert_eq!(c.grad(), 6.0);
    Ok(())
}

#[test]
fn test_product_op_empty() {
    assert!(matches!(
        product_op(&[]),
        Err(GradError::EmptyOperands { .. })
    ));
}

#[test]
fn test_mul_scalar_lifting() {
    let a = Value::new(4.0);
    assert_eq!((&a * 0.5).data(), 2.0);
    assert_eq!((3.0 * &a).data(), 12.0);
    assert_eq!((a.clone() * a.clone()).data(), 16.0);
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| &(&inputs[0] * &inputs[1]) * &inputs[0];
    check_grad(func, &[1.5, -2.0], 1e-6, 1e-6)
}

use super::*;
use crate::error::GradError;
use crate::ops::Operation;

#[test]
fn test_sub_forward() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.data(), -1.0);
    assert_eq!(c.operation(), Some(Operation::Add));
}

#[test]
fn test_sub_backward() -> Result<(), GradError> {
    let a = Value::new(5.0);
    let b = Value::new(2.0);
    let c = &a - &b;
    assert_eq!(c.data(), 3.0);
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
    Ok(())
}

#[test]
fn test_sub_self_is_zero_with_zero_grad() -> Result<(), GradError> {
    let a = Value::new(7.0);
    let c = &a - &a;
    assert_eq!(c.data(), 0.0);
    c.backward()?;
    assert_eq!(a.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sub_scalar_lifting() -> Result<(), GradError> {
    let a = Value::new(1.0);
    let left = &a - 4.0;
    let right = 4.0 - &a;
    assert_eq!(left.data(), -3.0);
    assert_eq!(right.data(), 3.0);
    right.backward()?;
    assert_eq!(a.grad(), -1.0);
    Ok(())
}

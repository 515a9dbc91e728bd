use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::error::GradError;
use approx::assert_relative_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_pow_forward() {
    let base = Value::new(2.0);
    let exponent = Value::new(3.0);
    let result = pow_op(&base, &exponent);
    assert_eq!(result.data(), 8.0);
    assert_eq!(result.operation(), Some(Operation::Pow));
    let operands = result.operands();
    assert!(operands[0].ptr_eq(&base));
    assert!(operands[1].ptr_eq(&exponent));
}

#[test]
fn test_pow_literal_exponent() -> Result<(), GradError> {
    let x = Value::new(2.0);
    let y = (&x).pow(3.0_f64);
    assert_relative_eq!(y.data(), 8.0);
    y.backward()?;
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert_relative_eq!(x.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_integer_exponent() {
    let x = Value::new(3.0);
    let y = x.clone().pow(2_i32);
    assert_eq!(y.data(), 9.0);
}

#[test]
fn test_pow_backward_both_operands() -> Result<(), GradError> {
    let base = Value::new(2.0);
    let exponent = Value::new(3.0);
    let result = (&base).pow(&exponent);
    result.backward()?;
    assert_relative_eq!(base.grad(), 12.0);
    assert_relative_eq!(exponent.grad(), 8.0 * 2.0_f64.ln());
    Ok(())
}

#[test]
fn test_pow_negative_base_skips_exponent_grad() -> Result<(), GradError> {
    init_logger();
    let base = Value::new(-2.0);
    let exponent = Value::new(2.0);
    let result = pow_op(&base, &exponent);
    assert_eq!(result.data(), 4.0);
    result.backward()?;
    // Base term is still well defined: 2 * (-2) = -4
    assert_relative_eq!(base.grad(), -4.0);
    assert_eq!(exponent.grad(), 0.0);
    assert!(exponent.grad().is_finite());
    Ok(())
}

#[test]
fn test_pow_zero_base_skips_exponent_grad() -> Result<(), GradError> {
    init_logger();
    let base = Value::new(0.0);
    let exponent = Value::new(2.0);
    let result = pow_op(&base, &exponent);
    result.backward()?;
    assert_eq!(base.grad(), 0.0);
    assert_eq!(exponent.grad(), 0.0);
    Ok(())
}

#[test]
fn test_pow_zero_base_negative_exponent_skips_base_grad() -> Result<(), GradError> {
    init_logger();
    // 0^(-1) is infinite and its derivative is singular; nothing finite to propagate.
    let base = Value::new(0.0);
    let exponent = Value::new(-1.0);
    let result = pow_op(&base, &exponent);
    assert!(result.data().is_infinite());
    result.backward()?;
    assert_eq!(base.grad(), 0.0);
    assert_eq!(exponent.grad(), 0.0);
    Ok(())
}

#[test]
fn test_pow_zero_base_exponent_one() -> Result<(), GradError> {
    // d/dx x^1 = 1 everywhere, including at 0.
    let base = Value::new(0.0);
    let result = (&base).pow(1.0_f64);
    result.backward()?;
    assert_eq!(base.grad(), 1.0);
    Ok(())
}

#[test]
fn test_pow_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| (&inputs[0]).pow(&inputs[1]);
    check_grad(func, &[1.7, 2.3], 1e-6, 1e-5)
}

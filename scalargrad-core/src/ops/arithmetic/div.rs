use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;

/// Divides two nodes, built as `a * b^(-1)`.
///
/// No division-specific backward rule: the power rule gives `grad(b) = -a / b^2`.
/// Dividing by a node holding zero produces an infinite forward value, as `f64` does.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, &Value::new(-1.0)))
}

impl_binary_operator!(Div, div, div_op);

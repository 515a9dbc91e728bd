use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

/// Subtracts two nodes, built as `a + (-b)`.
///
/// The result is an addition node; `b` sits one multiplication below it, so
/// `grad(a) = upstream` and `grad(b) = -upstream`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl_binary_operator!(Sub, sub, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;
use std::ops::Neg;

/// Negates a node, built as `a * (-1)`.
///
/// The result is a multiplication node whose second operand is a fresh literal leaf, so
/// the gradient of `a` is `-upstream`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operation;

    #[test]
    fn test_neg_forward_and_backward() {
        let a = Value::new(3.0);
        let b = -&a;
        assert_eq!(b.data(), -3.0);
        assert_eq!(b.operation(), Some(Operation::Mul));
        b.backward().unwrap();
        assert_eq!(a.grad(), -1.0);
        assert_eq!(b.grad(), 1.0);
    }

    #[test]
    fn test_double_negation() {
        let a = Value::new(2.5);
        let b = -(-&a);
        assert_eq!(b.data(), 2.5);
        b.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
    }
}

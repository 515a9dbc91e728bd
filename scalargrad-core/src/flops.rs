//! Forward-pass cost estimate for a computation graph.

use crate::autograd::graph::reachable_nodes;
use crate::ops::Operation;
use crate::value::Value;

/// Floating-point operations charged for one node.
///
/// An n-ary addition or multiplication performs `n - 1` binary operations. Power and the
/// unary functions are treated as free, like leaves.
fn node_cost(node: &Value) -> usize {
    match node.operation() {
        Some(Operation::Add) | Some(Operation::Mul) => node.operands().len().saturating_sub(1),
        Some(Operation::Pow) | Some(Operation::Tanh) | Some(Operation::Exp) | None => 0,
    }
}

/// Counts the FLOPs needed to recompute `root` from its leaves.
///
/// Every reachable node is charged once, however many consumers share it.
pub fn inference_flops(root: &Value) -> usize {
    reachable_nodes(root).iter().map(node_cost).sum()
}

impl Value {
    /// See [`inference_flops`].
    pub fn calculate_inference_flops(&self) -> usize {
        inference_flops(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::sum_op;

    #[test]
    fn test_leaf_costs_nothing() {
        assert_eq!(Value::new(1.0).calculate_inference_flops(), 0);
    }

    #[test]
    fn test_mul_then_add() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = Value::new(4.0);
        let d = &(&a * &b) + &c;
        assert_eq!(d.calculate_inference_flops(), 2);
        // Idempotent.
        assert_eq!(d.calculate_inference_flops(), 2);
    }

    #[test]
    fn test_shared_subexpression_counted_once() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a + &b;
        let d = &(&a * &b) + &c;
        assert_eq!(inference_flops(&d), 3);

        let e = &c * &c;
        assert_eq!(inference_flops(&e), 2);
    }

    #[test]
    fn test_nary_sum_cost() {
        let xs: Vec<Value> = (0..5).map(|i| Value::new(i as f64)).collect();
        let s = sum_op(&xs).unwrap();
        assert_eq!(s.calculate_inference_flops(), 4);
    }

    #[test]
    fn test_pow_and_unary_are_free() {
        let x = Value::new(0.5);
        let y = (&x * 2.0).tanh().exp();
        assert_eq!(y.calculate_inference_flops(), 1);
    }
}

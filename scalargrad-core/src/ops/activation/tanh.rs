use crate::autograd::BackwardOp;
use crate::ops::Operation;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for `tanh(x)`.
///
/// Captures the forward result: `d/dx tanh(x) = 1 - tanh(x)^2`.
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<Option<f64>> {
        vec![Some(grad_output * (1.0 - self.output * self.output))]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

/// Applies the hyperbolic tangent to a node.
pub fn tanh_op(input: &Value) -> Value {
    let output = input.data().tanh();
    let grad_fn = TanhBackward {
        input: input.clone(),
        output,
    };
    Value::from_op(output, Operation::Tanh, Rc::new(grad_fn))
}

impl Value {
    /// Hyperbolic tangent, see [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

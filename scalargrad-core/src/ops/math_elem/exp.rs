use crate::autograd::BackwardOp;
use crate::ops::Operation;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation for `exp(x)`; the derivative is the forward result itself.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<Option<f64>> {
        vec![Some(grad_output * self.output)]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

/// Computes `e^x`.
pub fn exp_op(input: &Value) -> Value {
    let output = input.data().exp();
    let grad_fn = ExpBackward {
        input: input.clone(),
        output,
    };
    Value::from_op(output, Operation::Exp, Rc::new(grad_fn))
}

impl Value {
    /// Exponential, see [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

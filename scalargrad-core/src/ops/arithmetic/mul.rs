use crate::autograd::BackwardOp;
use crate::error::GradError;
use crate::ops::Operation;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation context for (n-ary) multiplication.
///
/// Input `i` receives `grad_output * prod_{j != i} input_j`. The product of the other
/// inputs is built from prefix and suffix products rather than by dividing the total
/// product, so zero-valued inputs and inputs that appear more than once are exact.
#[derive(Debug)]
struct MulBackward {
    inputs: Vec<Value>,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<Option<f64>> {
        let values: Vec<f64> = self.inputs.iter().map(Value::data).collect();
        let n = values.len();

        // prefix[i] = values[0] * .. * values[i - 1]
        let mut prefix = vec![1.0; n + 1];
        for i in 0..n {
            prefix[i + 1] = prefix[i] * values[i];
        }
        // suffix[i] = values[i] * .. * values[n - 1]
        let mut suffix = vec![1.0; n + 1];
        for i in (0..n).rev() {
            suffix[i] = suffix[i + 1] * values[i];
        }

        (0..n)
            .map(|i| Some(grad_output * prefix[i] * suffix[i + 1]))
            .collect()
    }

    fn inputs(&self) -> Vec<Value> {
        self.inputs.clone()
    }
}

fn build_mul(inputs: Vec<Value>) -> Value {
    let data = inputs.iter().map(Value::data).product();
    Value::from_op(data, Operation::Mul, Rc::new(MulBackward { inputs }))
}

// --- Forward Operation ---

/// Multiplies two nodes: `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    build_mul(vec![a.clone(), b.clone()])
}

/// Multiplies any number of nodes into a single multiplication node.
///
/// # Errors
/// Returns `GradError::EmptyOperands` if `operands` is empty.
pub fn product_op(operands: &[Value]) -> Result<Value, GradError> {
    if operands.is_empty() {
        return Err(GradError::EmptyOperands {
            operation: Operation::Mul.to_string(),
        });
    }
    Ok(build_mul(operands.to_vec()))
}

impl_binary_operator!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::GradError;
use crate::ops::Operation;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation context for (n-ary) addition.
///
/// `d(sum)/d(input_i) = 1`, so every input receives the full upstream gradient.
#[derive(Debug)]
struct AddBackward {
    inputs: Vec<Value>,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<Option<f64>> {
        vec![Some(grad_output); self.inputs.len()]
    }

    fn inputs(&self) -> Vec<Value> {
        self.inputs.clone()
    }
}

fn build_add(inputs: Vec<Value>) -> Value {
    let data = inputs.iter().map(Value::data).sum();
    Value::from_op(data, Operation::Add, Rc::new(AddBackward { inputs }))
}

// --- Forward Operation ---

/// Adds two nodes: `a + b`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    build_add(vec![a.clone(), b.clone()])
}

/// Adds any number of nodes into a single addition node.
///
/// One node with many operands instead of a chain of binary additions, which keeps the
/// graph shallow for neuron pre-activations and losses.
///
/// # Errors
/// Returns `GradError::EmptyOperands` if `operands` is empty.
pub fn sum_op(operands: &[Value]) -> Result<Value, GradError> {
    if operands.is_empty() {
        return Err(GradError::EmptyOperands {
            operation: Operation::Add.to_string(),
        });
    }
    Ok(build_add(operands.to_vec()))
}

impl_binary_operator!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

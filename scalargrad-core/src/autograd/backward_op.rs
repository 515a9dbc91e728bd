use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every node that is not a leaf stores one implementation of this trait (its `grad_fn`).
/// The implementation owns handles to the operands it was built from, so it doubles as the
/// node's edge list: the differentiator reads [`BackwardOp::inputs`] to traverse the graph
/// and calls [`BackwardOp::backward`] to apply the chain rule.
pub trait BackwardOp: Debug {
    /// Computes the contribution of this operation to each operand's gradient.
    ///
    /// Receives `dRoot/dOutput` (`grad_output`, the node's accumulated gradient at the
    /// moment its rule fires) and returns `dRoot/dOutput * dOutput/dInput_i` for each input.
    ///
    /// # Returns
    /// One entry per input, in the order of [`BackwardOp::inputs`]. `None` means the
    /// contribution is mathematically undefined at the current operand values and is
    /// skipped; the operand's gradient is left untouched.
    fn backward(&self, grad_output: f64) -> Vec<Option<f64>>;

    /// Returns handles to the operands that participated in the forward operation.
    ///
    /// The order **must** match the order of contributions returned by `backward()`.
    /// An operand used twice (e.g. `a * a`) appears twice.
    fn inputs(&self) -> Vec<Value>;
}

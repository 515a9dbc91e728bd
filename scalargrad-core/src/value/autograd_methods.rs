use crate::autograd::graph::{reachable_nodes, topological_sort};
use crate::autograd::BackwardOptions;
use crate::error::GradError;
use crate::value::Value;

impl Value {
    /// Returns the accumulated gradient of the last differentiated root with respect to
    /// this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `grad_to_add` into this node's gradient.
    ///
    /// Gradients are never overwritten during a backward pass: a node used by several
    /// consumers receives the sum of their contributions.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }

    /// Performs the backward pass starting from this node with an upstream gradient of 1.
    ///
    /// Equivalent to `self.backward_with(BackwardOptions::default())`.
    pub fn backward(&self) -> Result<(), GradError> {
        self.backward_with(BackwardOptions::default())
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Every node reachable from `self` receives `upstream * d(self)/d(node)`, accumulated
    /// on top of whatever gradient it already holds; call [`Value::reset_grad`] between
    /// passes over overlapping graphs. The root's own gradient is set (not accumulated) to
    /// the upstream value.
    ///
    /// Nodes are processed in reverse-topological order, so a node's backward rule only
    /// runs once all of its consumers have contributed to its gradient.
    ///
    /// If `options` designates a target, every visited node other than the target has its
    /// gradient reset to zero once propagation is complete. Intermediate gradients are still
    /// computed; the restriction is a filter on the result.
    ///
    /// # Errors
    /// * `GradError::InvalidArgument` if the upstream gradient is not finite.
    /// * `GradError::TargetNotInGraph` if the target is not reachable from `self`.
    ///
    /// In both cases no gradient is modified. Undefined local derivatives (e.g. the
    /// exponent term of a power with non-positive base) are skipped, never reported as
    /// errors.
    pub fn backward_with(&self, options: BackwardOptions) -> Result<(), GradError> {
        options.validate()?;

        let sorted_nodes = topological_sort(self);

        if let Some(target) = options.with_respect_to.as_ref() {
            if !sorted_nodes.iter().any(|node| node.ptr_eq(target)) {
                return Err(GradError::TargetNotInGraph {
                    data: target.data(),
                });
            }
        }

        log::debug!(
            "backward: {} nodes reachable from {}, upstream grad {}",
            sorted_nodes.len(),
            self,
            options.upstream_grad
        );

        self.set_grad(options.upstream_grad);

        for node in sorted_nodes.iter() {
            // Leaves have no rule to apply.
            let Some(grad_fn) = node.grad_fn() else {
                continue;
            };
            let grad_output = node.grad();
            let input_grads = grad_fn.backward(grad_output);
            let inputs = grad_fn.inputs();
            debug_assert_eq!(
                input_grads.len(),
                inputs.len(),
                "BackwardOp {:?} returned a gradient count that does not match its inputs",
                grad_fn
            );

            for (input, grad_to_add) in inputs.iter().zip(input_grads) {
                if let Some(grad_to_add) = grad_to_add {
                    input.acc_grad(grad_to_add);
                }
            }
        }

        if let Some(target) = options.with_respect_to.as_ref() {
            for node in sorted_nodes.iter().filter(|node| !node.ptr_eq(target)) {
                node.set_grad(0.0);
            }
        }

        Ok(())
    }

    /// Resets gradients to zero.
    ///
    /// With `all_operands = false` only this node is reset. With `all_operands = true`
    /// every node reachable from this one is reset as well, which prepares the graph for
    /// another backward pass.
    pub fn reset_grad(&self, all_operands: bool) {
        if !all_operands {
            self.set_grad(0.0);
            return;
        }
        for node in reachable_nodes(self) {
            node.set_grad(0.0);
        }
    }

    /// Resets the gradient of this node only.
    pub fn zero_grad(&self) {
        self.reset_grad(false);
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;

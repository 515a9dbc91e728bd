// scalargrad-core/src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::GradError;
use crate::ops::Operation;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod debug;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node can be the operand of many downstream nodes, and every
///     clone of a `Value` is a handle to the *same* node (clones are cheap).
/// 2.  **Interior Mutability:** the gradient (and, for parameter updates, the data) can be
///     modified through a shared handle.
///
/// Node identity is the shared allocation, not the numeric value: two leaves built from the
/// same number are different nodes.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with zero gradient and no operation.
    pub fn new(data: f64) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a leaf node, rejecting NaN and infinities.
    ///
    /// # Errors
    /// Returns `GradError::InvalidOperand` if `data` is not finite.
    pub fn try_new(data: f64) -> Result<Self, GradError> {
        if !data.is_finite() {
            return Err(GradError::InvalidOperand {
                operation: "leaf".to_string(),
                reason: format!("expected a finite number, got {}", data),
            });
        }
        Ok(Value::new(data))
    }

    /// Builds a non-leaf node. Used by the operation entry points in [`crate::ops`].
    pub(crate) fn from_op(data: f64, operation: Operation, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::from_op(data, operation, grad_fn))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    /// Forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the forward value (e.g. a gradient-descent step on a parameter).
    ///
    /// Nodes already built on top of this one keep the values they computed at
    /// construction: forward values are never recomputed. Rebuild the graph from the
    /// leaves to observe the new value downstream. If an old graph is differentiated again,
    /// multiply and power rules read the new operand value; add needs no operand values, and
    /// tanh and exp use the output they saved at construction.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Operation that produced this node, or `None` for a leaf.
    pub fn operation(&self) -> Option<Operation> {
        self.read_data().operation
    }

    /// Returns `true` if the node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Handles to the operands this node was built from, in operation order.
    ///
    /// Empty for leaves. Power returns `[base, exponent]`.
    pub fn operands(&self) -> Vec<Value> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }

    /// Returns an optional reference to the backward rule of this node.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Returns `true` if both handles refer to the same graph node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

// Manual implementation of Clone: clones the handle, not the node.
impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;

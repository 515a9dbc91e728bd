// scalargrad-core/src/value_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::ops::Operation;

/// Internal storage and metadata for a [`Value`](crate::Value).
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by `Value` so that one node can be shared by
/// every downstream node that uses it as an operand, while its gradient stays mutable.
#[derive(Debug)]
pub struct ValueData {
    /// Forward value, computed eagerly when the node is built.
    pub(crate) data: f64,
    /// Accumulated gradient of the differentiated root with respect to this node.
    pub(crate) grad: f64,
    /// Primitive that produced this node. `None` for leaves.
    pub(crate) operation: Option<Operation>,
    /// Backward rule bound to this node's operands. `None` for leaves.
    ///
    /// The operands themselves are owned by the rule, see [`BackwardOp::inputs`].
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates leaf storage: no operation, no backward rule, zero gradient.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operation: None,
            grad_fn: None,
        }
    }

    /// Creates storage for the result of `operation`.
    pub(crate) fn from_op(data: f64, operation: Operation, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operation: Some(operation),
            grad_fn: Some(grad_fn),
        }
    }
}

//! Autograd machinery: backward rules, graph traversal and gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod options;

pub use backward_op::BackwardOp;
pub use options::BackwardOptions;

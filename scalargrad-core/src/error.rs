use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradError {
    #[error("Invalid operand for {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation {operation} requires at least one operand")]
    EmptyOperands { operation: String },

    #[error("Target node (data = {data}) is not reachable from the node being differentiated")]
    TargetNotInGraph { data: f64 },
}

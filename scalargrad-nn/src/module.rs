use crate::error::NnError;
use scalargrad_core::Value;

/// The base trait for all neural network modules (neurons, layers, models).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building the graph of the outputs on top of `inputs`.
    ///
    /// # Errors
    /// `NnError::InputSizeMismatch` if `inputs` does not have the expected length.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError>;

    /// Handles to every learnable parameter, including those of sub-modules.
    ///
    /// Parameters are leaves: updating them through a handle updates the module.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }

    /// Lifts plain numbers into fresh leaves and runs [`Module::forward`].
    fn forward_f64(&self, inputs: &[f64]) -> Result<Vec<Value>, NnError> {
        let inputs: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
        self.forward(&inputs)
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

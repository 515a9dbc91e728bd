use scalargrad_core::Value;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameters in place from the gradients accumulated by the last
/// backward pass.
pub trait Optimizer {
    /// Performs a single optimization step over `params`.
    fn step(&mut self, params: &[Value]);

    /// Current step size.
    fn lr(&self) -> f64;

    /// Overrides the step size used by the next [`Optimizer::step`].
    fn set_lr(&mut self, lr: f64);

    /// Clears the gradients of `params`.
    ///
    /// Called before each backward pass, since gradients accumulate across passes.
    fn zero_grad(&self, params: &[Value]) {
        for param in params {
            param.zero_grad();
        }
    }
}

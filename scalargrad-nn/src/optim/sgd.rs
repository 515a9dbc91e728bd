use crate::error::NnError;
use crate::optim::optimizer_trait::Optimizer;
use scalargrad_core::Value;

/// Implements plain Stochastic Gradient Descent: `p <- p - lr * grad(p)`.
#[derive(Debug, Clone)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd`.
    ///
    /// # Errors
    /// `NnError::InvalidArgument` unless `lr` is finite and positive.
    pub fn new(lr: f64) -> Result<Self, NnError> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(NnError::InvalidArgument(format!(
                "learning rate must be finite and positive, got {}",
                lr
            )));
        }
        Ok(Sgd { lr })
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &[Value]) {
        for param in params {
            param.set_data(param.data() - self.lr * param.grad());
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;

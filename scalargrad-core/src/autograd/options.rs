use crate::error::GradError;
use crate::value::Value;

/// Parameters of a backward pass.
///
/// The target node and the upstream gradient are separate, typed fields, so one can never
/// be passed where the other is expected.
///
/// ```
/// use scalargrad_core::{BackwardOptions, Value};
///
/// let a = Value::new(2.0);
/// let b = Value::new(3.0);
/// let c = &a + &b;
/// c.backward_with(BackwardOptions::new().with_respect_to(&a)).unwrap();
/// assert_eq!(a.grad(), 1.0);
/// assert_eq!(b.grad(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BackwardOptions {
    pub(crate) with_respect_to: Option<Value>,
    pub(crate) upstream_grad: f64,
}

impl Default for BackwardOptions {
    /// No target, upstream gradient of 1 (`d(root)/d(root)`).
    fn default() -> Self {
        BackwardOptions {
            with_respect_to: None,
            upstream_grad: 1.0,
        }
    }
}

impl BackwardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the gradient of `target` once the pass is complete; every other visited
    /// node is reset to zero afterwards.
    pub fn with_respect_to(mut self, target: &Value) -> Self {
        self.with_respect_to = Some(target.clone());
        self
    }

    /// Gradient flowing into the root, `dL/d(root)`.
    pub fn upstream_grad(mut self, upstream_grad: f64) -> Self {
        self.upstream_grad = upstream_grad;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), GradError> {
        if !self.upstream_grad.is_finite() {
            return Err(GradError::InvalidArgument(format!(
                "upstream gradient must be finite, got {}",
                self.upstream_grad
            )));
        }
        Ok(())
    }
}

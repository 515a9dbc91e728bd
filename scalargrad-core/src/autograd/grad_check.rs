use crate::error::GradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index} (f(x+eps) = {output_plus}, f(x-eps) = {output_minus})")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input")]
    EmptyInputs,
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradError),
}

impl From<GradError> for GradCheckError {
    fn from(err: GradError) -> Self {
        GradCheckError::BackwardPassError(err)
    }
}

fn leaves(inputs: &[f64]) -> Vec<Value> {
    inputs.iter().copied().map(Value::new).collect()
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is called on fresh leaves built from `inputs`; every call builds a new graph, so
/// `func` must be pure. For each input `i` the analytical gradient after one backward pass
/// is compared with `(f(x + eps e_i) - f(x - eps e_i)) / (2 eps)` using
/// `approx::relative_eq!` with `tolerance` as both the absolute and relative bound.
///
/// ```
/// use scalargrad_core::autograd::grad_check::check_grad;
/// use scalargrad_core::Value;
///
/// let square_plus = |x: &[Value]| &(&x[0] * &x[0]) + &x[1];
/// assert!(check_grad(square_plus, &[3.0, 1.0], 1e-6, 1e-6).is_ok());
/// ```
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }

    // --- 1. Analytical gradients ---
    let analytical_inputs = leaves(inputs);
    let output = func(&analytical_inputs);
    output.backward()?;
    let analytical: Vec<f64> = analytical_inputs.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, analytical_grad) in analytical.into_iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + epsilon;
        let output_plus = func(&leaves(&shifted)).data();
        shifted[input_index] = inputs[input_index] - epsilon;
        let output_minus = func(&leaves(&shifted)).data();

        let numerical_grad = (output_plus - output_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                output_plus,
                output_minus,
            });
        }

        log::trace!(
            "check_grad: input {} analytical {} numerical {}",
            input_index,
            analytical_grad,
            numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

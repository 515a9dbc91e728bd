use crate::error::NnError;
use scalargrad_core::ops::sum_op;
use scalargrad_core::Value;
use std::str::FromStr;

/// Specifies the reduction applied to the per-element squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NnError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions and constant targets.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node `reduce((p_i - t_i)^2)`.
    ///
    /// Targets are lifted into fresh leaves; only the predictions' ancestors receive
    /// meaningful gradients.
    ///
    /// # Errors
    /// * `NnError::LengthMismatch` if the slices differ in length.
    /// * `NnError::Grad(GradError::EmptyOperands)` if both are empty.
    pub fn forward(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, NnError> {
        if predictions.len() != targets.len() {
            return Err(NnError::LengthMismatch {
                predictions: predictions.len(),
                targets: targets.len(),
            });
        }
        let squared_errors: Vec<Value> = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, &target)| {
                let diff = prediction - target;
                &diff * &diff
            })
            .collect();
        let total = sum_op(&squared_errors)?;
        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => &total / squared_errors.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

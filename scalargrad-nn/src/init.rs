use crate::error::NnError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Strategy used to draw the starting value of a weight or bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    Zeros,
    Constant(f64),
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Initializer {
    /// Checks the distribution parameters.
    ///
    /// # Errors
    /// `NnError::InvalidInitializer` for non-finite parameters, `low >= high` or `std < 0`.
    pub fn validate(&self) -> Result<(), NnError> {
        match *self {
            Initializer::Zeros => Ok(()),
            Initializer::Constant(value) => {
                if value.is_finite() {
                    Ok(())
                } else {
                    Err(NnError::InvalidInitializer(format!(
                        "constant must be finite, got {}",
                        value
                    )))
                }
            }
            Initializer::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(NnError::InvalidInitializer(format!(
                        "uniform bounds must be finite, got [{}, {})",
                        low, high
                    )));
                }
                if low >= high {
                    return Err(NnError::InvalidInitializer(format!(
                        "uniform requires low < high, got [{}, {})",
                        low, high
                    )));
                }
                Ok(())
            }
            Initializer::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(NnError::InvalidInitializer(format!(
                        "normal requires a finite mean and a finite std >= 0, got mean {} std {}",
                        mean, std
                    )));
                }
                Ok(())
            }
        }
    }

    /// Draws one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, NnError> {
        self.validate()?;
        match *self {
            Initializer::Zeros => Ok(0.0),
            Initializer::Constant(value) => Ok(value),
            Initializer::Uniform { low, high } => Ok(Uniform::new(low, high).sample(rng)),
            Initializer::Normal { mean, std } => {
                let normal = Normal::new(mean, std)
                    .map_err(|e| NnError::InvalidInitializer(e.to_string()))?;
                Ok(normal.sample(rng))
            }
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;

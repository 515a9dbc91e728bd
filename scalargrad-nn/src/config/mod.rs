//! Training configuration.
//!
//! Load from the environment with [`from_env`] (or [`TrainingConfig::from_env`]) and check
//! with [`TrainingConfig::validate`] before use.

mod builder;
pub mod constants;

use crate::activation::Activation;
use crate::error::ConfigError;
use crate::init::Initializer;
use constants::{
    DEFAULT_EPOCHS, DEFAULT_INIT_HIGH, DEFAULT_INIT_LOW, DEFAULT_LEARNING_RATE, DEFAULT_LOG_EVERY,
    DEFAULT_SEED,
};

pub use builder::{env_key, env_parsed, env_string, from_env};

/// Hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// SGD step size.
    pub learning_rate: f64,
    /// Number of full-batch gradient steps.
    pub epochs: usize,
    /// Seed for weight initialization.
    pub seed: u64,
    /// Log the loss every this many epochs.
    pub log_every: usize,
    /// Lower bound of the uniform weight initializer.
    pub init_low: f64,
    /// Upper bound of the uniform weight initializer.
    pub init_high: f64,
    pub hidden_activation: Activation,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            seed: DEFAULT_SEED,
            log_every: DEFAULT_LOG_EVERY,
            init_low: DEFAULT_INIT_LOW,
            init_high: DEFAULT_INIT_HIGH,
            hidden_activation: Activation::Tanh,
        }
    }
}

impl TrainingConfig {
    /// See [`from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        from_env()
    }

    /// Validates ranges. Returns the first violated rule as `ConfigError::Validation`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ConfigError::Validation(
                "epochs must be greater than 0".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(ConfigError::Validation(
                "log_every must be greater than 0".to_string(),
            ));
        }
        if !self.init_low.is_finite() || !self.init_high.is_finite() {
            return Err(ConfigError::Validation(format!(
                "init bounds must be finite, got [{}, {})",
                self.init_low, self.init_high
            )));
        }
        if self.init_low >= self.init_high {
            return Err(ConfigError::Validation(format!(
                "init_low ({}) must be less than init_high ({})",
                self.init_low, self.init_high
            )));
        }
        Ok(())
    }

    /// Weight initializer described by the `init_*` bounds.
    pub fn initializer(&self) -> Initializer {
        Initializer::Uniform {
            low: self.init_low,
            high: self.init_high,
        }
    }
}

use scalargrad_core::GradError;
use thiserror::Error;

/// Errors produced by the neural-network layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NnError {
    #[error("Autograd error: {0}")]
    Grad(#[from] GradError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid initializer: {0}")]
    InvalidInitializer(String),

    #[error("Length mismatch: {predictions} predictions for {targets} targets")]
    LengthMismatch { predictions: usize, targets: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot train on an empty dataset")]
    EmptyDataset,
}

/// Errors produced when building or validating a [`crate::TrainingConfig`].
///
/// * `Validation`: values are out of range; raised by `validate()`.
/// * `EnvVar`: a variable is set but unreadable (not Unicode).
/// * `Parse`: a variable is set but does not parse into the expected type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("config validation: {0}")]
    Validation(String),

    #[error("env var {key}: {message}")]
    EnvVar { key: String, message: String },

    #[error("env var {key}={value:?}: {message}")]
    Parse {
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// Short message suitable for logging.
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
        }
    }
}

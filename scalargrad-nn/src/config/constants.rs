//! Defaults and environment variable names for [`super::TrainingConfig`].

pub const ENV_PREFIX: &str = "SCALARGRAD_";

pub const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub const ENV_EPOCHS: &str = "EPOCHS";
pub const ENV_SEED: &str = "SEED";
pub const ENV_LOG_EVERY: &str = "LOG_EVERY";
pub const ENV_INIT_LOW: &str = "INIT_LOW";
pub const ENV_INIT_HIGH: &str = "INIT_HIGH";
pub const ENV_HIDDEN_ACTIVATION: &str = "HIDDEN_ACTIVATION";

pub const DEFAULT_LEARNING_RATE: f64 = 0.05;
pub const DEFAULT_EPOCHS: usize = 100;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_LOG_EVERY: usize = 10;
pub const DEFAULT_INIT_LOW: f64 = -1.0;
pub const DEFAULT_INIT_HIGH: f64 = 1.0;

//! Build [`TrainingConfig`] from environment variables.

use super::constants::{
    ENV_EPOCHS, ENV_HIDDEN_ACTIVATION, ENV_INIT_HIGH, ENV_INIT_LOW, ENV_LEARNING_RATE,
    ENV_LOG_EVERY, ENV_PREFIX, ENV_SEED,
};
use super::TrainingConfig;
use crate::activation::Activation;
use crate::error::ConfigError;

/// Returns the full environment variable key for a suffix (`SEED` -> `SCALARGRAD_SEED`).
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// `Ok(None)` if unset, `Err(ConfigError::EnvVar)` if set but not valid Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into `T`.
///
/// `Ok(None)` if unset, `Err(ConfigError::Parse)` if set but unparsable
/// (e.g. `SCALARGRAD_EPOCHS=many`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds a [`TrainingConfig`] from `SCALARGRAD_*` variables, falling back to
/// [`TrainingConfig::default`] for unset ones. The result is not validated.
pub fn from_env() -> Result<TrainingConfig, ConfigError> {
    let default = TrainingConfig::default();

    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let epochs = env_parsed::<usize>(&env_key(ENV_EPOCHS))?.unwrap_or(default.epochs);
    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let log_every = env_parsed::<usize>(&env_key(ENV_LOG_EVERY))?.unwrap_or(default.log_every);
    let init_low = env_parsed::<f64>(&env_key(ENV_INIT_LOW))?.unwrap_or(default.init_low);
    let init_high = env_parsed::<f64>(&env_key(ENV_INIT_HIGH))?.unwrap_or(default.init_high);
    let hidden_activation = env_parsed::<Activation>(&env_key(ENV_HIDDEN_ACTIVATION))?
        .unwrap_or(default.hidden_activation);

    Ok(TrainingConfig {
        learning_rate,
        epochs,
        seed,
        log_every,
        init_low,
        init_high,
        hidden_activation,
    })
}

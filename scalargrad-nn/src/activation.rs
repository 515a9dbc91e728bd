use crate::error::NnError;
use scalargrad_core::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    Identity,
    #[default]
    Tanh,
}

impl Activation {
    pub fn apply(&self, input: &Value) -> Value {
        match self {
            Activation::Identity => input.clone(),
            Activation::Tanh => input.tanh(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Identity => f.write_str("identity"),
            Activation::Tanh => f.write_str("tanh"),
        }
    }
}

impl FromStr for Activation {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identity" | "linear" => Ok(Activation::Identity),
            "tanh" => Ok(Activation::Tanh),
            _ => Err(NnError::InvalidArgument(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_same_node() {
        let x = Value::new(0.3);
        assert!(Activation::Identity.apply(&x).ptr_eq(&x));
    }

    #[test]
    fn test_tanh_builds_node() {
        let x = Value::new(0.3);
        let y = Activation::Tanh.apply(&x);
        assert_eq!(y.data(), 0.3_f64.tanh());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Tanh".parse::<Activation>(), Ok(Activation::Tanh));
        assert_eq!("linear".parse::<Activation>(), Ok(Activation::Identity));
        assert!("relu".parse::<Activation>().is_err());
        assert_eq!(Activation::Identity.to_string(), "identity");
    }
}

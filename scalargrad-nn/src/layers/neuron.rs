use crate::activation::Activation;
use crate::error::NnError;
use crate::init::Initializer;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::ops::sum_op;
use scalargrad_core::Value;

/// A single neuron: `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias, all drawn from `initializer`.
    ///
    /// # Errors
    /// `NnError::InvalidArchitecture` if `nin == 0`, `NnError::InvalidInitializer` if the
    /// initializer is malformed.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        initializer: Initializer,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nin == 0 {
            return Err(NnError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = (0..nin)
            .map(|_| initializer.sample(rng).map(Value::new))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = Value::new(initializer.sample(rng)?);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Builds a neuron from explicit parameter values.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Forward pass producing the single output node.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NnError> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        // One n-ary sum node for the whole pre-activation.
        let mut terms: Vec<Value> = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .collect();
        terms.push(self.bias.clone());
        let pre_activation = sum_op(&terms)?;
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

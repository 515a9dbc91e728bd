use crate::activation::Activation;
use crate::error::NnError;
use crate::init::Initializer;
use crate::layers::neuron::Neuron;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::Value;

/// A fully connected layer: `nout` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        initializer: Initializer,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nout == 0 {
            return Err(NnError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, initializer, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NnError> {
        let Some(first) = neurons.first() else {
            return Err(NnError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        };
        let nin = first.nin();
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(NnError::InvalidArchitecture(format!(
                "all neurons of a layer must share their input size ({} != {})",
                odd.nin(),
                nin
            )));
        }
        Ok(Layer { neurons })
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_shapes() {
        let mut rng = StdRng::seed_from_u64(5);
        let layer = Layer::new(3, 2, Initializer::default(), Activation::Tanh, &mut rng).unwrap();
        assert_eq!((layer.nin(), layer.nout()), (3, 2));
        assert_eq!(layer.num_parameters(), 8);
        let out = layer.forward_f64(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_neurons_share_inputs() {
        let layer = Layer::from_neurons(vec![
            Neuron::from_weights(&[1.0, 0.0], 0.0, Activation::Identity),
            Neuron::from_weights(&[0.0, 2.0], 1.0, Activation::Identity),
        ])
        .unwrap();
        let x = [Value::new(3.0), Value::new(4.0)];
        let out = layer.forward(&x).unwrap();
        assert_eq!(out[0].data(), 3.0);
        assert_eq!(out[1].data(), 9.0);
        let total: Value = out.iter().sum();
        total.backward().unwrap();
        assert_eq!(x[0].grad(), 1.0);
        assert_eq!(x[1].grad(), 2.0);
    }

    #[test]
    fn test_invalid_layers() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(Layer::new(3, 0, Initializer::Zeros, Activation::Tanh, &mut rng).is_err());
        assert!(Layer::from_neurons(Vec::new()).is_err());
        assert!(Layer::from_neurons(vec![
            Neuron::from_weights(&[1.0], 0.0, Activation::Tanh),
            Neuron::from_weights(&[1.0, 2.0], 0.0, Activation::Tanh),
        ])
        .is_err());
    }

    #[test]
    fn test_wrong_input_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let layer = Layer::new(2, 2, Initializer::Zeros, Activation::Tanh, &mut rng).unwrap();
        assert!(matches!(
            layer.forward_f64(&[1.0, 2.0, 3.0]),
            Err(NnError::InputSizeMismatch { expected: 2, actual: 3 })
        ));
    }
}

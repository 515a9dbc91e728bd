use crate::activation::Activation;
use crate::error::NnError;
use crate::init::Initializer;
use crate::layers::layer::Layer;
use crate::module::Module;
use rand::Rng;
use scalargrad_core::Value;

/// A multi-layer perceptron.
///
/// Hidden layers apply `hidden_activation`; the output layer is linear so the model can
/// regress values outside `(-1, 1)`.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds `nin -> layer_sizes[0] -> .. -> layer_sizes[last]`.
    ///
    /// # Errors
    /// `NnError::InvalidArchitecture` if `nin` is zero, `layer_sizes` is empty or contains a
    /// zero.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        layer_sizes: &[usize],
        hidden_activation: Activation,
        initializer: Initializer,
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if nin == 0 || layer_sizes.is_empty() || layer_sizes.contains(&0) {
            return Err(NnError::InvalidArchitecture(format!(
                "expected a non-zero input size and non-empty, non-zero layer sizes, got {} -> {:?}",
                nin, layer_sizes
            )));
        }
        initializer.validate()?;

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = nin;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let activation = if i + 1 == layer_sizes.len() {
                Activation::Identity
            } else {
                hidden_activation
            };
            layers.push(Layer::new(fan_in, size, initializer, activation, rng)?);
            fan_in = size;
        }
        log::debug!(
            "Mlp: {} -> {:?}, {} parameters",
            nin,
            layer_sizes,
            layers.iter().map(Module::num_parameters).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NnError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}

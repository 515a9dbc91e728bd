//! # scalargrad-nn
//!
//! Small neural-network building blocks on top of [`scalargrad_core`]: neurons, dense
//! layers, multi-layer perceptrons, a squared-error loss, SGD and a batch training loop.
//! Every parameter is a plain [`Value`] leaf, so a model's loss is just another
//! expression graph.

pub mod activation;
pub mod config;
pub mod error;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod optim;
pub mod train;

pub use activation::Activation;
pub use config::TrainingConfig;
pub use error::{ConfigError, NnError};
pub use init::Initializer;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
pub use optim::{Optimizer, Sgd};
pub use train::{Trainer, TrainingReport};

pub use scalargrad_core::Value;

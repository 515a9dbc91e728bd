use crate::config::TrainingConfig;
use crate::error::NnError;
use crate::losses::MseLoss;
use crate::module::Module;
use crate::optim::Optimizer;
use scalargrad_core::Value;

/// Loss history of a [`Trainer::fit`] run, one entry per epoch (before that epoch's step).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingReport {
    pub losses: Vec<f64>,
}

impl TrainingReport {
    pub fn epochs(&self) -> usize {
        self.losses.len()
    }

    pub fn initial_loss(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Full-batch gradient descent driver.
#[derive(Debug)]
pub struct Trainer<O: Optimizer> {
    optimizer: O,
    loss_fn: MseLoss,
}

impl<O: Optimizer> Trainer<O> {
    pub fn new(optimizer: O, loss_fn: MseLoss) -> Self {
        Trainer { optimizer, loss_fn }
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// Builds the loss of `model` over the whole dataset without taking a step.
    pub fn loss<M: Module>(&self, model: &M, dataset: &[(Vec<f64>, Vec<f64>)]) -> Result<Value, NnError> {
        if dataset.is_empty() {
            return Err(NnError::EmptyDataset);
        }
        let mut predictions = Vec::new();
        let mut targets = Vec::new();
        for (inputs, expected) in dataset {
            predictions.extend(model.forward_f64(inputs)?);
            targets.extend_from_slice(expected);
        }
        self.loss_fn.forward(&predictions, &targets)
    }

    /// Trains `model` on `dataset` (pairs of inputs and targets) for `config.epochs`
    /// epochs.
    ///
    /// The optimizer's step size is set to `config.learning_rate` before the first epoch.
    /// Each epoch zeroes the parameter gradients, builds the loss over every sample,
    /// back-propagates once and applies one optimizer step.
    ///
    /// # Errors
    /// * `NnError::Config` if `config` does not validate.
    /// * `NnError::EmptyDataset` if `dataset` is empty.
    /// * Shape errors from the model or the loss.
    pub fn fit<M: Module>(
        &mut self,
        model: &M,
        dataset: &[(Vec<f64>, Vec<f64>)],
        config: &TrainingConfig,
    ) -> Result<TrainingReport, NnError> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(NnError::EmptyDataset);
        }

        self.optimizer.set_lr(config.learning_rate);
        let params = model.parameters();
        let mut report = TrainingReport {
            losses: Vec::with_capacity(config.epochs),
        };
        log::info!(
            "training: {} samples, {} parameters, {} epochs, lr {}",
            dataset.len(),
            params.len(),
            config.epochs,
            config.learning_rate
        );

        for epoch in 0..config.epochs {
            self.optimizer.zero_grad(&params);
            let loss = self.loss(model, dataset)?;
            loss.backward()?;
            self.optimizer.step(&params);

            let loss_value = loss.data();
            report.losses.push(loss_value);
            if epoch % config.log_every == 0 || epoch + 1 == config.epochs {
                log::info!("epoch {:>4}: loss {:.6}", epoch, loss_value);
            }
        }

        Ok(report)
    }
}

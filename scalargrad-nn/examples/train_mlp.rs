//! # Training a small MLP
//!
//! Fits a `3 -> 4 -> 4 -> 1` perceptron to four labelled points with full-batch SGD.
//! Hyperparameters come from `SCALARGRAD_*` environment variables (see
//! `scalargrad_nn::config::constants`), e.g.
//!
//! `RUST_LOG=info SCALARGRAD_EPOCHS=200 cargo run --example train_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_nn::{Mlp, Module, MseLoss, NnError, Reduction, Sgd, Trainer, TrainingConfig};

fn main() -> Result<(), NnError> {
    env_logger::init();

    let config = TrainingConfig::from_env()?;
    config.validate()?;

    let dataset = vec![
        (vec![2.0, 3.0, -1.0], vec![1.0]),
        (vec![3.0, -1.0, 0.5], vec![-1.0]),
        (vec![0.5, 1.0, 1.0], vec![-1.0]),
        (vec![1.0, 1.0, -1.0], vec![1.0]),
    ];

    let mut rng = StdRng::seed_from_u64(config.seed);
    let model = Mlp::new(
        3,
        &[4, 4, 1],
        config.hidden_activation,
        config.initializer(),
        &mut rng,
    )?;
    println!("model has {} parameters", model.num_parameters());

    let mut trainer = Trainer::new(Sgd::new(config.learning_rate)?, MseLoss::new(Reduction::Mean));
    let report = trainer.fit(&model, &dataset, &config)?;
    println!(
        "loss {:.6} -> {:.6} over {} epochs",
        report.initial_loss().unwrap_or(f64::NAN),
        report.final_loss().unwrap_or(f64::NAN),
        report.epochs()
    );

    for (inputs, targets) in &dataset {
        let prediction = model.forward_f64(inputs)?;
        println!("{:?} -> {:.4} (target {})", inputs, prediction[0].data(), targets[0]);
    }
    Ok(())
}
